//! # Mock 调度器
//!
//! 记录型调度器实现，用于主机端测试。
//!
//! ## 功能特性
//!
//! - 记录每一次任务创建请求（名称、栈大小、优先级）
//! - 保存任务入口闭包，可在受控的步数预算下同步执行
//! - 模拟任务槽位耗尽（[`BlinkError::TaskSlotsFull`]）
//! - 模拟任务内存池耗尽（[`BlinkError::OutOfMemory`]）
//!
//! ## 使用示例
//!
//! ```rust
//! use hercules_blink::compat::Box;
//! use hercules_blink::rtos::{Scheduler, TaskConfig};
//! use hercules_blink::rtos::mock::MockScheduler;
//!
//! let mut sched = MockScheduler::new();
//! let handle = sched
//!     .create_task(TaskConfig::new("t"), Box::new(|delay| delay.delay_ticks(250)))
//!     .unwrap();
//!
//! let run = sched.run_task(handle, 1).unwrap();
//! assert_eq!(run.delays, [250]);
//! ```

use super::{DelayTicks, Scheduler, TaskConfig, TaskEntry, TaskHandle};
use crate::compat::Vec;
use crate::error::{BlinkError, Result};

/// 默认任务槽位数
pub const DEFAULT_TASK_SLOTS: usize = 8;

/// 一次任务创建请求的记录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRecord {
    pub name: &'static str,
    pub stack_words: usize,
    pub priority: u8,
}

/// 一次受控任务执行的结果
#[derive(Debug)]
pub struct TaskRun {
    /// 任务每次挂起请求的节拍数，按发生顺序
    pub delays: Vec<u32>,
    /// 任务入口的退出结果
    ///
    /// 预算耗尽退出时为 `Err(SchedulerStopped)`。
    pub exit: Result<()>,
}

/// 步数预算型延时原语
///
/// 记录每次挂起请求的节拍数；当记录条数达到预算时返回
/// [`BlinkError::SchedulerStopped`]，让永续循环的任务体退出。
pub struct ScriptedDelay {
    delays: Vec<u32>,
    budget: usize,
}

impl ScriptedDelay {
    pub fn with_budget(budget: usize) -> Self {
        Self {
            delays: Vec::new(),
            budget,
        }
    }

    /// 已记录的挂起请求
    pub fn delays(&self) -> &[u32] {
        &self.delays
    }
}

impl DelayTicks for ScriptedDelay {
    fn delay_ticks(&mut self, ticks: u32) -> Result<()> {
        self.delays.push(ticks);
        if self.delays.len() >= self.budget {
            Err(BlinkError::SchedulerStopped)
        } else {
            Ok(())
        }
    }
}

/// Mock 调度器
pub struct MockScheduler {
    capacity: usize,
    records: Vec<SpawnRecord>,
    entries: Vec<Option<TaskEntry>>,
    out_of_memory: bool,
}

impl MockScheduler {
    /// 创建新的 Mock 调度器，容量为 [`DEFAULT_TASK_SLOTS`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TASK_SLOTS)
    }

    /// 创建指定槽位容量的 Mock 调度器
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            records: Vec::new(),
            entries: Vec::new(),
            out_of_memory: false,
        }
    }

    /// 模拟任务内存池耗尽（测试用）
    ///
    /// 置位后所有创建请求返回 [`BlinkError::OutOfMemory`]，
    /// 对应真实调度器里任务栈/上下文分配失败的情形。
    pub fn set_out_of_memory(&mut self, exhausted: bool) {
        self.out_of_memory = exhausted;
    }

    /// 全部任务创建记录
    pub fn spawn_records(&self) -> &[SpawnRecord] {
        &self.records
    }

    /// 已注册任务数
    pub fn task_count(&self) -> usize {
        self.records.len()
    }

    /// 在给定步数预算下同步执行一个已注册任务
    ///
    /// 每个任务入口只能执行一次（所有权移交，与真实任务一致）。
    pub fn run_task(&mut self, handle: TaskHandle, budget: usize) -> Result<TaskRun> {
        let entry = self
            .entries
            .get_mut(handle.0)
            .and_then(Option::take)
            .ok_or(BlinkError::TaskNotFound)?;

        let mut delay = ScriptedDelay::with_budget(budget);
        let exit = entry(&mut delay);
        Ok(TaskRun {
            delays: delay.delays,
            exit,
        })
    }
}

impl Default for MockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for MockScheduler {
    fn create_task(&mut self, config: TaskConfig, entry: TaskEntry) -> Result<TaskHandle> {
        if self.out_of_memory {
            return Err(BlinkError::OutOfMemory);
        }
        if self.records.len() >= self.capacity {
            return Err(BlinkError::TaskSlotsFull);
        }
        let handle = TaskHandle(self.records.len());
        self.records.push(SpawnRecord {
            name: config.get_name(),
            stack_words: config.get_stack_words(),
            priority: config.get_priority(),
        });
        self.entries.push(Some(entry));
        Ok(handle)
    }

    fn start(self) -> ! {
        // Mock 调度器不能接管主机进程
        panic!("MockScheduler::start() is not runnable on the host");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Box;

    #[test]
    fn test_create_task_records_config() {
        let mut sched = MockScheduler::new();
        let handle = sched
            .create_task(
                TaskConfig::new("t1").stack_words(128).priority(1),
                Box::new(|_| Ok(())),
            )
            .unwrap();

        assert_eq!(handle, TaskHandle(0));
        assert_eq!(
            sched.spawn_records(),
            [SpawnRecord {
                name: "t1",
                stack_words: 128,
                priority: 1,
            }]
        );
    }

    #[test]
    fn test_capacity_enforced() {
        let mut sched = MockScheduler::with_capacity(1);
        sched
            .create_task(TaskConfig::new("t1"), Box::new(|_| Ok(())))
            .unwrap();
        let err = sched
            .create_task(TaskConfig::new("t2"), Box::new(|_| Ok(())))
            .err();
        assert_eq!(err, Some(BlinkError::TaskSlotsFull));
    }

    #[test]
    fn test_out_of_memory_rejects_creation() {
        let mut sched = MockScheduler::new();
        sched.set_out_of_memory(true);
        let err = sched
            .create_task(TaskConfig::new("t"), Box::new(|_| Ok(())))
            .err();
        assert_eq!(err, Some(BlinkError::OutOfMemory));
        assert_eq!(sched.task_count(), 0);

        // 内存恢复后创建正常
        sched.set_out_of_memory(false);
        assert!(
            sched
                .create_task(TaskConfig::new("t"), Box::new(|_| Ok(())))
                .is_ok()
        );
    }

    #[test]
    fn test_run_task_budget() {
        let mut sched = MockScheduler::new();
        let handle = sched
            .create_task(
                TaskConfig::new("looper"),
                Box::new(|delay| loop {
                    delay.delay_ticks(100)?;
                }),
            )
            .unwrap();

        let run = sched.run_task(handle, 3).unwrap();
        assert_eq!(run.delays, [100, 100, 100]);
        assert_eq!(run.exit, Err(BlinkError::SchedulerStopped));
    }

    #[test]
    fn test_run_task_only_once() {
        let mut sched = MockScheduler::new();
        let handle = sched
            .create_task(TaskConfig::new("t"), Box::new(|_| Ok(())))
            .unwrap();

        assert!(sched.run_task(handle, 1).is_ok());
        assert_eq!(sched.run_task(handle, 1).err(), Some(BlinkError::TaskNotFound));
    }

    #[test]
    fn test_run_unknown_task() {
        let mut sched = MockScheduler::new();
        assert_eq!(
            sched.run_task(TaskHandle(3), 1).err(),
            Some(BlinkError::TaskNotFound)
        );
    }
}
