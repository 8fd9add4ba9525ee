//! # GIO 端口抽象
//!
//! 定义闪烁应用对 GPIO 外设的全部依赖：配置方向、写单个输出位。
//! 应用逻辑对具体端口实现泛型化：
//!
//! - [`hercules`]: TMS570 片上 GIO 寄存器块（真机目标）
//! - [`mock`]: 主机端记录型端口（测试用）
//!
//! ## 使用示例
//!
//! ```rust
//! use hercules_blink::gio::{GioPort, mock::MockGioPort};
//!
//! let mut port = MockGioPort::new("gioPORTB");
//! port.set_direction(0xFF).unwrap();
//! port.set_bit(6, true).unwrap();
//! assert!(port.level(6));
//! ```

pub mod hercules;
pub mod macros;
#[cfg(feature = "spin")]
pub mod mock;

/// GIO 驱动错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GioError {
    /// 引脚编号超出端口范围
    PinOutOfRange,
    /// 引脚未配置为输出
    PinNotOutput,
    /// 端口方向尚未配置
    NotInitialized,
}

impl core::fmt::Display for GioError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GioError::PinOutOfRange => write!(f, "Pin index out of range"),
            GioError::PinNotOutput => write!(f, "Pin is not configured as output"),
            GioError::NotInitialized => write!(f, "Port direction not configured"),
        }
    }
}

/// GIO 端口 trait
///
/// 对应原始驱动的 `gioSetDirection` / `gioSetBit` 两个入口。
/// 每个任务持有自己的端口句柄，只写自己的位；
/// 底层的置位/清位操作在外设层面是原子的，句柄之间无需互斥。
pub trait GioPort {
    /// 端口错误类型
    type Error: core::fmt::Debug;

    /// 配置端口方向，掩码中为 1 的位配置为输出
    fn set_direction(&mut self, mask: u8) -> Result<(), Self::Error>;

    /// 写一个输出位的电平
    fn set_bit(&mut self, pin: u8, level: bool) -> Result<(), Self::Error>;

    /// 端口名称，用于调试和日志
    fn name(&self) -> &'static str {
        "GIO"
    }
}
