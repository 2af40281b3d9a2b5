/// One of the four checks a probe cycle performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    Cpu,
    Memory,
    Disk,
    Processes,
}

impl CheckKind {
    /// Order in which a cycle runs the checks.
    pub const ALL: [Self; 4] = [Self::Cpu, Self::Memory, Self::Disk, Self::Processes];
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cpu => write!(f, "cpu"),
            Self::Memory => write!(f, "memory"),
            Self::Disk => write!(f, "disk"),
            Self::Processes => write!(f, "processes"),
        }
    }
}
