/// One point-in-time observation of a process.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessSample {
    pub pid: u32,
    pub user: Option<String>,
    /// Percent of one core; exceeds 100 on multi-core load.
    pub cpu: f32,
    /// Percent of total physical memory.
    pub mem: f32,
    pub command: String,
}

impl ProcessSample {
    pub fn user_label(&self) -> &str {
        self.user.as_deref().unwrap_or("?")
    }
}
