//! # 调度器协作方契约
//!
//! 本 crate 不实现调度器，只定义闪烁应用对外部实时调度器的依赖面：
//! 创建任务、按节拍挂起、移交控制权。真实固件由底层 RTOS 实现这些
//! trait；主机测试使用 [`mock`] 模块的记录型实现。
//!
//! 任务上下文通过 [`TaskEntry`] 闭包按所有权传入，取代原始接口中
//! `void *` 裸指针传参——参数记录在任务整个生命周期内归任务所有。

use crate::compat::Box;
use crate::config::{BLINK_PRIORITY, STACK_WORDS};
use crate::error::Result;

pub mod mock;

/// 任务句柄
///
/// 由调度器分配的不透明标识。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskHandle(pub usize);

/// 任务创建参数
///
/// 建造者风格的参数配置，默认值来自 [`crate::config`]。
///
/// # 示例
///
/// ```rust
/// use hercules_blink::rtos::TaskConfig;
///
/// let config = TaskConfig::new("blink_led2")
///     .stack_words(128)
///     .priority(1);
/// assert_eq!(config.get_stack_words(), 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskConfig {
    name: &'static str,
    stack_words: usize,
    priority: u8,
}

impl TaskConfig {
    /// 创建新的任务配置
    ///
    /// # 默认值
    /// - 栈大小: `config::STACK_WORDS`（字）
    /// - 优先级: `config::BLINK_PRIORITY`
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            stack_words: STACK_WORDS,
            priority: BLINK_PRIORITY,
        }
    }

    /// 设置栈大小（以字为单位）
    pub fn stack_words(mut self, words: usize) -> Self {
        self.stack_words = words;
        self
    }

    /// 设置任务优先级
    pub fn priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// 获取配置的任务名称
    pub fn get_name(&self) -> &'static str {
        self.name
    }

    /// 获取配置的栈大小
    pub fn get_stack_words(&self) -> usize {
        self.stack_words
    }

    /// 获取配置的优先级
    pub fn get_priority(&self) -> u8 {
        self.priority
    }
}

/// 按节拍挂起当前任务的原语（对应 `vTaskDelay`）
///
/// 真实调度器的实现永远返回 `Ok`；只有测试用的实现会在步数预算
/// 耗尽时返回错误，以便让永续的任务循环退出。
pub trait DelayTicks {
    /// 将当前任务挂起 `ticks` 个节拍
    fn delay_ticks(&mut self, ticks: u32) -> Result<()>;
}

/// 任务入口闭包
///
/// 按所有权携带任务自己的上下文，入口返回 `Err` 表示任务因协作方
/// 故障退出（真实固件中不会发生）。
pub type TaskEntry = Box<dyn FnOnce(&mut dyn DelayTicks) -> Result<()> + Send + 'static>;

/// 外部调度器契约
///
/// 对应 `xTaskCreate` / `vTaskStartScheduler`。
pub trait Scheduler {
    /// 注册一个新任务
    fn create_task(&mut self, config: TaskConfig, entry: TaskEntry) -> Result<TaskHandle>;

    /// 移交控制权，开始多任务调度
    ///
    /// 注册阶段到此结束（按值消费调度器），正常情况下永不返回。
    fn start(self) -> !
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_config_defaults() {
        let config = TaskConfig::new("blink_led2");
        assert_eq!(config.get_name(), "blink_led2");
        assert_eq!(config.get_stack_words(), STACK_WORDS);
        assert_eq!(config.get_priority(), BLINK_PRIORITY);
    }

    #[test]
    fn test_task_config_chain() {
        let config = TaskConfig::new("t").stack_words(256).priority(3);
        assert_eq!(config.get_stack_words(), 256);
        assert_eq!(config.get_priority(), 3);
    }
}
