use crate::engine::metadata::{Segment, SegmentStatus};

/// Factory for creating `Segment` instances in tests.
pub struct SegmentFactory {
    name: String,
    status: SegmentStatus,
    storage_location: Option<String>,
    last_build_job_id: Option<String>,
    date_range_start: i64,
    date_range_end: i64,
}

impl SegmentFactory {
    pub fn new() -> Self {
        Self {
            name: "seg1".to_string(),
            status: SegmentStatus::New,
            storage_location: Some("CUBE_STORAGE_SEG1".to_string()),
            last_build_job_id: None,
            date_range_start: 0,
            date_range_end: 300,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_status(mut self, status: SegmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_storage_location(mut self, identifier: &str) -> Self {
        self.storage_location = Some(identifier.to_string());
        self
    }

    pub fn without_storage_location(mut self) -> Self {
        self.storage_location = None;
        self
    }

    pub fn with_last_build_job(mut self, job_id: &str) -> Self {
        self.last_build_job_id = Some(job_id.to_string());
        self
    }

    pub fn with_range(mut self, start: i64, end: i64) -> Self {
        self.date_range_start = start;
        self.date_range_end = end.max(start);
        self
    }

    pub fn create(self) -> Segment {
        let mut segment = Segment::new(self.name, self.status);
        if let Some(identifier) = self.storage_location {
            segment
                .assign_storage_location(&identifier)
                .expect("fresh segment accepts a storage location");
        }
        segment.last_build_job_id = self.last_build_job_id;
        segment.date_range_start = self.date_range_start;
        segment.date_range_end = self.date_range_end;
        segment
    }

    /// `count` built segments laid end to end, each `span` wide, starting at the
    /// factory's range start. Names and job ids are suffixed with the position.
    pub fn create_ready_list(self, count: usize, span: i64) -> Vec<Segment> {
        (0..count)
            .map(|i| {
                let start = self.date_range_start + (i as i64) * span;
                SegmentFactory::new()
                    .with_name(&format!("{}_{}", self.name, i + 1))
                    .with_status(SegmentStatus::Ready)
                    .with_storage_location(&format!("CUBE_STORAGE_{}_{}", self.name, i + 1))
                    .with_last_build_job(&format!("build-job-{}", i + 1))
                    .with_range(start, start + span)
                    .create()
            })
            .collect()
    }
}
