//! 兼容层模块
//!
//! 统一处理 no_std 和 test 环境的类型导入，避免在多个文件中重复编写条件编译代码。
//!
//! # 导出类型
//!
//! - `Box` - 堆分配的智能指针（任务入口闭包的载体）
//! - `Vec` - 动态数组（mock 记录用）
//! - `Arc` - 原子引用计数智能指针（mock 端口的共享状态）
//! - `String` / `format!` - 动态字符串

#[cfg(not(test))]
pub use alloc::{boxed::Box, format, string::String, sync::Arc, vec, vec::Vec};

#[cfg(test)]
pub use std::{boxed::Box, format, string::String, sync::Arc, vec, vec::Vec};
