// 应用的编译期配置：引脚分配、闪烁频率、任务参数
// 与原始固件保持一致：LED2 在 6 号脚以 2Hz 闪烁，LED3 在 7 号脚以 3Hz 闪烁

/// 每个 GIO 端口的引脚数
pub const PORT_PINS: u8 = 8;
/// 端口方向掩码：全部 8 个引脚配置为输出
pub const BLINK_PORT_DIRECTION_MASK: u8 = 0xFF;

pub const LED2_PIN: u8 = 6;
pub const LED3_PIN: u8 = 7;
pub const LED2_HZ: u32 = 2;
pub const LED3_HZ: u32 = 3;

/// 调度器节拍频率（ticks per second）
///
/// 延时计算不会硬编码这个值，它只是固件组装时注入的默认节拍率。
pub const TICK_HZ: u32 = 1000;

/// 闪烁任务栈大小（以字为单位）
pub const STACK_WORDS: usize = 128;
/// 闪烁任务优先级
pub const BLINK_PRIORITY: u8 = 1;

/// 片上堆大小（hercules feature 下由 embedded-alloc 管理）
pub const HEAP_SIZE: usize = 4 * 1024;
