#[derive(Debug, Clone)]
/// Issue record as returned from the tracker.
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone)]
/// Pull request record as returned from the tracker. The body may itself
/// reference further issues or pull requests.
pub struct PullRequest {
    pub number: u64,
    pub body: String,
}
