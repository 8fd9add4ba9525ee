//! # Hercules TMS570 GIO 驱动
//!
//! TMS570LC43x 片上 GIO 模块的薄封装，只覆盖闪烁应用用到的部分：
//! 模块复位、端口方向配置、单个输出位写入。
//!
//! 寄存器布局来自 TMS570 技术参考手册：模块基地址 `0xFFF7_BC00`，
//! 端口 A 位于 +0x34，端口 B 位于 +0x54。写输出位走 DSET/DCLR
//! 寄存器，对单个位的置位/清位在外设层面是原子的，两个任务各写
//! 各的位不会互相干扰。
//!
//! ## 使用示例（仅真机）
//!
//! ```rust,ignore
//! use hercules_blink::gio::hercules;
//!
//! // Safety: 只在目标芯片上、且独占 GIO 模块时调用
//! unsafe { hercules::init() };
//! let port_b = unsafe { hercules::HerculesGioPort::port_b() };
//! ```

use super::{GioError, GioPort};
use crate::register_block;

/// GIO 模块基地址
pub const GIO_BASE: usize = 0xFFF7_BC00;
/// 端口 A 寄存器块基地址
pub const GIO_PORTA_BASE: usize = GIO_BASE + 0x34;
/// 端口 B 寄存器块基地址
pub const GIO_PORTB_BASE: usize = GIO_BASE + 0x54;

register_block! {
    name: GioGlobalRegs,
    registers: {
        gcr0: u32, 0x00;
        intdet: u32, 0x08;
        pol: u32, 0x0C;
        enaclr: u32, 0x14;
    }
}

register_block! {
    name: GioPortRegs,
    registers: {
        dir: u32, 0x00;
        din: u32, 0x04;
        dout: u32, 0x08;
        dset: u32, 0x0C;
        dclr: u32, 0x10;
        pdr: u32, 0x14;
        puldis: u32, 0x18;
        psl: u32, 0x1C;
    }
}

/// 将 GIO 模块带出复位状态（对应原始驱动的 `gioInit`）
///
/// # Safety
///
/// 只能在目标芯片上调用，且调用者必须独占 GIO 模块。
pub unsafe fn init() {
    let global = unsafe { GioGlobalRegs::new(GIO_BASE) };
    global.gcr0_write(1);
}

/// Hercules GIO 端口句柄
///
/// `Copy` 句柄语义：同一个物理端口可以有多个句柄别名，
/// 每个任务持有自己的句柄、只写自己的位。
#[derive(Clone, Copy)]
pub struct HerculesGioPort {
    regs: GioPortRegs,
    name: &'static str,
}

impl HerculesGioPort {
    /// 端口 A 句柄
    ///
    /// # Safety
    ///
    /// 只能在目标芯片上使用，且 [`init`] 必须已经调用。
    pub const unsafe fn port_a() -> Self {
        Self {
            regs: unsafe { GioPortRegs::new(GIO_PORTA_BASE) },
            name: "gioPORTA",
        }
    }

    /// 端口 B 句柄（板载 LED2/LED3 所在端口）
    ///
    /// # Safety
    ///
    /// 只能在目标芯片上使用，且 [`init`] 必须已经调用。
    pub const unsafe fn port_b() -> Self {
        Self {
            regs: unsafe { GioPortRegs::new(GIO_PORTB_BASE) },
            name: "gioPORTB",
        }
    }
}

impl GioPort for HerculesGioPort {
    type Error = GioError;

    fn set_direction(&mut self, mask: u8) -> Result<(), Self::Error> {
        self.regs.dir_write(mask as u32);
        Ok(())
    }

    fn set_bit(&mut self, pin: u8, level: bool) -> Result<(), Self::Error> {
        if pin >= crate::config::PORT_PINS {
            return Err(GioError::PinOutOfRange);
        }
        // DSET/DCLR 写 1 的位生效，其余位不受影响
        if level {
            self.regs.dset_write(1 << pin);
        } else {
            self.regs.dclr_write(1 << pin);
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
