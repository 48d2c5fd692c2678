/// Label names attached to every sample, in exposition order.
pub const LABEL_NAMES: [&str; 2] = ["jobName", "jobId"];

/// Fixed set of gauges exported per job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Active,
    Status,
    ExitCode,
    ExitCodeResult,
    Missed,
    ExecutionTime,
}

impl MetricKind {
    /// Every kind, in the order samples are emitted for a job.
    pub const ALL: [MetricKind; 6] = [
        MetricKind::Active,
        MetricKind::Status,
        MetricKind::ExitCode,
        MetricKind::ExitCodeResult,
        MetricKind::Missed,
        MetricKind::ExecutionTime,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Active => "job_active",
            MetricKind::Status => "job_status",
            MetricKind::ExitCode => "job_exit_code",
            MetricKind::ExitCodeResult => "job_exit_code_result",
            MetricKind::Missed => "job_missed",
            MetricKind::ExecutionTime => "job_execution_time",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            MetricKind::Active => "Displays whether the job is active or not. 1 = Active, 0 = Inactive.",
            MetricKind::Status => "Displays the job's status. 1 = Waiting, 0 = Running.",
            MetricKind::ExitCode => {
                "Displays the job's last exit code. Can be any value since it is customizable on a per script basis."
            }
            MetricKind::ExitCodeResult => {
                "Displays the job's last exit code result. 1 = Success, 2 = Fail/Unknown/Currently Running, 3 = Never Ran."
            }
            MetricKind::Missed => "Displays whether the job has missed its last scheduled run. 1 = Missed, 0 = Not missed.",
            MetricKind::ExecutionTime => "Displays the job's last execution time in seconds.",
        }
    }

    /// Position in [`MetricKind::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}
