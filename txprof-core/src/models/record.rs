use std::fmt::{self, Display};

///
/// One transcript as handed over by a sequence source.
///
/// `id` is the first whitespace-delimited token of the descriptor line,
/// `description` is whatever follows it. The sequence keeps its original case,
/// which the case-pattern segmentation depends on.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct SequenceRecord {
    pub id: String,
    pub description: Option<String>,
    pub seq: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            description: None,
            seq: seq.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    ///
    /// Value of the last `key=value` token found in the descriptor.
    ///
    /// The description is searched first, then the id (some sources glue the
    /// annotation onto the id with a separator). The key must start the text or
    /// follow whitespace, `;` or `|`, so `ORF_CDS=` is not read as `CDS=`. The
    /// value ends at the first whitespace or `;`. Returns `None` when the key
    /// does not occur at all.
    ///
    pub fn annotation(&self, key: &str) -> Option<&str> {
        let marker = format!("{key}=");
        [self.description.as_deref(), Some(self.id.as_str())]
            .into_iter()
            .flatten()
            .find_map(|text| {
                let at = text
                    .rmatch_indices(marker.as_str())
                    .map(|(i, _)| i)
                    .find(|&i| {
                        text[..i]
                            .chars()
                            .next_back()
                            .is_none_or(|c| c.is_whitespace() || c == ';' || c == '|')
                    })?;
                let start = at + marker.len();
                text[start..]
                    .split(|c: char| c.is_whitespace() || c == ';')
                    .next()
            })
    }
}

impl Display for SequenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, ">{} {}", self.id, desc),
            None => write!(f, ">{}", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case("CDS=61-1020", Some("61-1020"))]
    #[case("gene=abc CDS=3-7 extra", Some("3-7"))]
    #[case("CDS=1-2;note=x", Some("1-2"))]
    #[case("CDS=1-2 CDS=5-9", Some("5-9"))]
    #[case("no annotation here", None)]
    #[case("ORF_CDS=1-9", None)]
    #[case("xCDS=1-2 CDS=3-4", Some("3-4"))]
    #[case("CDS=3-4 ORF_CDS=1-9", Some("3-4"))]
    #[case("gene=abc;CDS=5-8", Some("5-8"))]
    fn test_annotation_from_description(#[case] desc: &str, #[case] expected: Option<&str>) {
        let record = SequenceRecord::new("tx1", b"ACGT".to_vec()).with_description(desc);
        assert_eq!(record.annotation("CDS"), expected);
    }

    #[rstest]
    fn test_annotation_falls_back_to_id() {
        let record = SequenceRecord::new("tx1|CDS=2-3", b"ACGT".to_vec());
        assert_eq!(record.annotation("CDS"), Some("2-3"));
    }

    #[rstest]
    fn test_annotation_missing_without_description() {
        let record = SequenceRecord::new("tx1", b"ACGT".to_vec());
        assert_eq!(record.annotation("CDS"), None);
    }

    #[rstest]
    fn test_display_descriptor() {
        let record = SequenceRecord::new("tx1", Vec::new()).with_description("CDS=1-3");
        assert_eq!(record.to_string(), ">tx1 CDS=1-3");
        assert!(record.is_empty());
    }
}
