//! Pipeline stages shown while a submission is in flight.
//!
//! Purely informational: the endpoint reports no progress, so the list is
//! the same for every submission and nothing is ever marked done.

/// One step of the server-side pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineStage {
    pub label: &'static str,
    pub description: &'static str,
}

/// The stages, in pipeline order.
pub const PIPELINE_STAGES: [PipelineStage; 4] = [
    PipelineStage {
        label: "Reading files",
        description: "Extracting content from uploaded files",
    },
    PipelineStage {
        label: "Processing content",
        description: "Creating intelligent chunks and extracting key information",
    },
    PipelineStage {
        label: "Generating embeddings",
        description: "Converting text to vector embeddings",
    },
    PipelineStage {
        label: "Storing in database",
        description: "Saving processed data to the vector database",
    },
];

/// Footnote under the stage list.
pub const PROCESSING_NOTE: &str =
    "This may take a few minutes depending on file size and content complexity...";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let labels: Vec<&str> = PIPELINE_STAGES.iter().map(|s| s.label).collect();
        assert_eq!(
            labels,
            vec![
                "Reading files",
                "Processing content",
                "Generating embeddings",
                "Storing in database"
            ]
        );
    }
}
