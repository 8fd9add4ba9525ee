//! # 寄存器块宏
//!
//! 提供便捷的宏来定义内存映射寄存器块。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use hercules_blink::register_block;
//!
//! register_block! {
//!     name: GioPortRegs,
//!     registers: {
//!         dir: u32, 0x00;
//!         din: u32, 0x04;
//!         dout: u32, 0x08;
//!     }
//! }
//!
//! let port = unsafe { GioPortRegs::new(0xFFF7_BC54) };
//! port.dir_write(0xFF);
//! let level = port.din();
//! ```

/// 定义寄存器块的宏
///
/// 自动生成寄存器块结构体和每个寄存器的易失性访问方法。
/// 同一布局可以在不同基地址实例化多次（例如 GIO 的 A/B 两个端口）。
///
/// # 生成内容
///
/// - 结构体 `Name`，持有基地址，`Copy`（句柄语义，同一外设可有多个别名）
/// - 每个寄存器的读取方法 `reg_name()`
/// - 每个寄存器的写入方法 `reg_name_write()`
/// - 每个寄存器的地址方法 `reg_name_addr()`
#[macro_export]
macro_rules! register_block {
    (
        name: $name:ident,
        registers: {
            $($reg_name:ident : $reg_type:ty , $offset:expr);* $(;)?
        }
    ) => {
        /// 自动生成的寄存器块结构体
        #[derive(Clone, Copy)]
        pub struct $name {
            base: usize,
        }

        impl $name {
            /// 创建新的寄存器块实例
            ///
            /// # Safety
            ///
            /// `base` 必须指向目标外设的有效寄存器块。
            pub const unsafe fn new(base: usize) -> Self {
                Self { base }
            }

            /// 获取基地址
            pub const fn base_addr(&self) -> usize {
                self.base
            }

            $(
                $crate::paste::paste! {
                    /// 读取寄存器值
                    #[inline]
                    pub fn $reg_name(&self) -> $reg_type {
                        unsafe {
                            core::ptr::read_volatile((self.base + $offset) as *const $reg_type)
                        }
                    }

                    /// 写入寄存器值
                    #[inline]
                    pub fn [<$reg_name _write>](&self, value: $reg_type) {
                        unsafe {
                            core::ptr::write_volatile((self.base + $offset) as *mut $reg_type, value)
                        }
                    }

                    /// 获取寄存器地址
                    #[inline]
                    pub const fn [<$reg_name _addr>](&self) -> usize {
                        self.base + $offset
                    }
                }
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    register_block! {
        name: TestRegs,
        registers: {
            ctrl: u32, 0x00;
            data: u32, 0x04;
        }
    }

    #[test]
    fn test_register_addresses() {
        let regs = unsafe { TestRegs::new(0x4000_0000) };
        assert_eq!(regs.base_addr(), 0x4000_0000);
        assert_eq!(regs.ctrl_addr(), 0x4000_0000);
        assert_eq!(regs.data_addr(), 0x4000_0004);
    }
}
