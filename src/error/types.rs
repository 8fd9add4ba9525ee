use crate::gio::GioError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkError {
    // 参数校验
    InvalidFrequency,
    DegenerateHalfPeriod,

    // 调度器相关
    TaskSlotsFull,
    TaskNotFound,
    SchedulerStopped,

    // 内存相关
    OutOfMemory,

    // 端口驱动相关
    Gio(GioError),
}

impl core::fmt::Display for BlinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BlinkError::InvalidFrequency => write!(f, "Frequency must be a positive integer"),
            BlinkError::DegenerateHalfPeriod => {
                write!(f, "Half period truncates to zero ticks at this tick rate")
            }
            BlinkError::TaskSlotsFull => write!(f, "Task slots full"),
            BlinkError::TaskNotFound => write!(f, "Task not found"),
            BlinkError::SchedulerStopped => write!(f, "Scheduler stopped"),
            BlinkError::OutOfMemory => write!(f, "Out of memory"),
            BlinkError::Gio(e) => write!(f, "GIO driver error: {}", e),
        }
    }
}

impl From<GioError> for BlinkError {
    fn from(e: GioError) -> Self {
        BlinkError::Gio(e)
    }
}

pub type Result<T> = core::result::Result<T, BlinkError>;
