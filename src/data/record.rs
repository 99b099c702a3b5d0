use serde::{Deserialize, Serialize};

use crate::data::sample::Sample;

/// One entry of a persisted dataset document:
///
/// ```json
/// { "id": 0, "inputs": [0.234, 0.892], "output": 1.0 }
/// ```
///
/// `id` is the sample's position at write time. It is optional on read and
/// discarded; document order alone defines sample order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    #[serde(default)]
    pub id: usize,
    pub inputs: [f64; 2],
    pub output: f64,
}

impl SampleRecord {
    pub fn from_sample(id: usize, sample: &Sample) -> SampleRecord {
        SampleRecord { id, inputs: sample.inputs, output: sample.result }
    }

    pub fn into_sample(self) -> Sample {
        Sample::new(self.inputs, self.output)
    }
}

/// Numbers samples by position.
pub fn to_records(samples: &[Sample]) -> Vec<SampleRecord> {
    samples.iter()
        .enumerate()
        .map(|(id, sample)| SampleRecord::from_sample(id, sample))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_numbered_by_position() {
        let samples = vec![
            Sample::new([0.1, 0.2], 0.0),
            Sample::new([0.6, 0.2], 1.0),
        ];
        let records = to_records(&samples);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[1].id, 1);
        assert_eq!(records[1].inputs, [0.6, 0.2]);
        assert_eq!(records[1].output, 1.0);
    }

    #[test]
    fn test_record_field_names() {
        let record = SampleRecord::from_sample(7, &Sample::new([0.5, 0.25], 1.0));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["inputs"][0], 0.5);
        assert_eq!(value["inputs"][1], 0.25);
        assert_eq!(value["output"], 1.0);
    }

    #[test]
    fn test_id_is_optional_on_read() {
        let record: SampleRecord =
            serde_json::from_str(r#"{ "inputs": [0.1, 0.2], "output": 0.3 }"#).unwrap();
        assert_eq!(record.into_sample(), Sample::new([0.1, 0.2], 0.3));
    }

    #[test]
    fn test_wrong_input_arity_is_rejected() {
        let three = r#"{ "id": 0, "inputs": [0.1, 0.2, 0.3], "output": 0.0 }"#;
        assert!(serde_json::from_str::<SampleRecord>(three).is_err());
        let one = r#"{ "id": 0, "inputs": [0.1], "output": 0.0 }"#;
        assert!(serde_json::from_str::<SampleRecord>(one).is_err());
    }

    #[test]
    fn test_missing_output_is_rejected() {
        let text = r#"{ "id": 0, "inputs": [0.1, 0.2] }"#;
        assert!(serde_json::from_str::<SampleRecord>(text).is_err());
    }
}
