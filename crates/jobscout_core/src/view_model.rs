use crate::Job;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub page: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub has_next_page: Option<bool>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub job_count: usize,
    pub jobs: Vec<JobCardView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub location: Option<String>,
    pub kind: Option<String>,
    pub created_at: Option<String>,
    pub url: Option<String>,
    pub how_to_apply: Option<String>,
}

impl JobCardView {
    pub(crate) fn from_job(job: &Job) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            company_url: job.company_url.clone(),
            location: job.location.clone(),
            kind: job.kind.clone(),
            created_at: job.created_at.clone(),
            url: job.url.clone(),
            how_to_apply: job.how_to_apply.clone(),
        }
    }
}
