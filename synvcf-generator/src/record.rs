use std::fmt::{self, Display};

///
/// One VCF data line, borrowed from the pass that produced it. Rows are
/// serialized immediately and never retained.
///
#[derive(Debug, Clone, Copy)]
pub struct RowRecord<'a> {
    pub chromosome: &'a str,
    pub position: u64,
    pub id: &'a str,
    pub reference: u8,
    pub alternate: u8,
    pub qual: u32,
    pub filter: &'a str,
    pub info: &'a str,
    pub format: &'a str,
    pub samples: &'a [String],
}

impl Display for RowRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chromosome,
            self.position,
            self.id,
            self.reference as char,
            self.alternate as char,
            self.qual,
            self.filter,
            self.info,
            self.format,
        )?;
        for sample in self.samples {
            write!(f, "\t{sample}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_display_is_tab_joined() {
        let samples = vec!["0|0".to_string(), "1|0".to_string()];
        let record = RowRecord {
            chromosome: "chr1",
            position: 17,
            id: ".",
            reference: b'A',
            alternate: b'T',
            qual: 42,
            filter: "PASS",
            info: "DP=10;AF=0.5;NS=2",
            format: "GT",
            samples: &samples,
        };
        assert_eq!(
            record.to_string(),
            "chr1\t17\t.\tA\tT\t42\tPASS\tDP=10;AF=0.5;NS=2\tGT\t0|0\t1|0"
        );
    }
}
