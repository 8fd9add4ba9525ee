//! # 闪烁应用
//!
//! 原始固件的全部业务逻辑：配置一个 GIO 端口的方向，然后注册两个
//! 周期性任务，分别以 2Hz / 3Hz 翻转 6 号和 7 号引脚。
//!
//! 控制流：[`launch`]（配置方向 → 两次 [`spawn_blinker`]）→ 调用方
//! 调用 [`Scheduler::start`] 永久移交控制权 → 两个任务各自执行
//! [`Blinker::run`] 的翻转-挂起循环。
//!
//! 每个任务的参数记录 [`BlinkArgs`] 在创建时构造一次，按所有权移入
//! 任务闭包，天然满足"记录必须比任务活得久"的约束。

use crate::compat::Box;
use crate::config::{
    BLINK_PORT_DIRECTION_MASK, BLINK_PRIORITY, LED2_HZ, LED2_PIN, LED3_HZ, LED3_PIN, PORT_PINS,
    STACK_WORDS,
};
use crate::error::{BlinkError, Result};
use crate::gio::{GioError, GioPort};
use crate::info;
use crate::rtos::{DelayTicks, Scheduler, TaskConfig, TaskHandle};

/// 每任务参数记录
///
/// 持有端口句柄、引脚编号和目标翻转频率。任务启动时读取一次，
/// 之后不再变化。
pub struct BlinkArgs<P> {
    pub port: P,
    pub pin: u8,
    pub frequency_hz: u32,
}

/// 半周期节拍数：`floor(tick_hz / (2 × frequency_hz))`
///
/// 节拍率是显式参数，不在公式里硬编码。1000 ticks/s 时 2Hz 得 250，
/// 3Hz 因整数截断得 166（实际周期 332 而不是 333.33 节拍，频率误差
/// 属于预期行为，不做修正）。
///
/// # 错误
///
/// - 频率为 0：[`BlinkError::InvalidFrequency`]
/// - `2 × frequency_hz > tick_hz` 时半周期截断为 0，任务会退化成
///   忙等循环：[`BlinkError::DegenerateHalfPeriod`]
pub fn half_period_ticks(tick_hz: u32, frequency_hz: u32) -> Result<u32> {
    if frequency_hz == 0 {
        return Err(BlinkError::InvalidFrequency);
    }
    let ticks = tick_hz / (2 * frequency_hz);
    if ticks == 0 {
        return Err(BlinkError::DegenerateHalfPeriod);
    }
    Ok(ticks)
}

/// 翻转状态机
///
/// 两个状态 {高, 低}，从高电平开始。每次迭代写出当前电平、翻转
/// 状态、挂起半个周期。参数在构造时校验完毕，循环体内不再有
/// 失败路径（协作方故障除外）。
pub struct Blinker<P> {
    args: BlinkArgs<P>,
    on: bool,
    half_period: u32,
}

impl<P> Blinker<P>
where
    P: GioPort,
    P::Error: Into<BlinkError>,
{
    /// 校验参数并构造状态机
    ///
    /// 这是可失败的构造步骤：频率和引脚编号非法时在这里拒绝，
    /// 不会把坏参数带进任务。
    pub fn new(args: BlinkArgs<P>, tick_hz: u32) -> Result<Self> {
        if args.pin >= PORT_PINS {
            return Err(BlinkError::Gio(GioError::PinOutOfRange));
        }
        let half_period = half_period_ticks(tick_hz, args.frequency_hz)?;
        Ok(Self {
            args,
            on: true,
            half_period,
        })
    }

    /// 当前状态是否为高电平
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// 半周期节拍数
    pub fn half_period(&self) -> u32 {
        self.half_period
    }

    /// 本任务操作的引脚
    pub fn pin(&self) -> u8 {
        self.args.pin
    }

    /// 目标翻转频率
    pub fn frequency_hz(&self) -> u32 {
        self.args.frequency_hz
    }

    /// 单次迭代：写出当前电平，翻转状态，挂起半个周期
    pub fn step(&mut self, delay: &mut dyn DelayTicks) -> Result<()> {
        self.args
            .port
            .set_bit(self.args.pin, self.on)
            .map_err(Into::into)?;
        self.on = !self.on;
        delay.delay_ticks(self.half_period)
    }

    /// 任务主体：永续的翻转-挂起循环
    ///
    /// 只有协作方报错才会退出；真实调度器和真实端口不会报错，
    /// 任务随设备运行终生。
    pub fn run(mut self, delay: &mut dyn DelayTicks) -> Result<()> {
        loop {
            self.step(delay)?;
        }
    }
}

/// 构造参数记录并注册一个闪烁任务
///
/// 参数校验失败或调度器拒绝创建时返回错误，不会把半成品任务
/// 留在调度器里。
pub fn spawn_blinker<P, S>(
    sched: &mut S,
    name: &'static str,
    args: BlinkArgs<P>,
    tick_hz: u32,
) -> Result<TaskHandle>
where
    P: GioPort + Send + 'static,
    P::Error: Into<BlinkError>,
    S: Scheduler,
{
    let blinker = Blinker::new(args, tick_hz)?;
    let (pin, hz) = (blinker.pin(), blinker.frequency_hz());

    let config = TaskConfig::new(name)
        .stack_words(STACK_WORDS)
        .priority(BLINK_PRIORITY);
    let handle = sched.create_task(config, Box::new(move |delay| blinker.run(delay)))?;

    info!("spawned {} (pin {}, {} Hz)", name, pin, hz);
    Ok(handle)
}

/// 配置闪烁端口：全部 8 个引脚设为输出
///
/// 对应原始固件的 `gioSetDirection(gioPORTB, 0xFF)`。外设层面的
/// 配置错误在这一层不可检测（真实端口总是返回 `Ok`）。
pub fn initialize<P>(port: &mut P) -> Result<()>
where
    P: GioPort,
    P::Error: Into<BlinkError>,
{
    port.set_direction(BLINK_PORT_DIRECTION_MASK)
        .map_err(Into::into)?;
    info!("{} direction mask set to {:#04x}", port.name(), BLINK_PORT_DIRECTION_MASK);
    Ok(())
}

/// 应用入口序列
///
/// 对应原始固件的 `main`：端口全部引脚配置为输出，然后注册
/// LED2（6 号脚，2Hz）和 LED3（7 号脚，3Hz）两个任务。两次创建
/// 的结果用同一种方式检查并向调用方上抛。随后由调用方执行
/// [`Scheduler::start`]。
pub fn launch<P, S>(sched: &mut S, mut port: P, tick_hz: u32) -> Result<(TaskHandle, TaskHandle)>
where
    P: GioPort + Clone + Send + 'static,
    P::Error: Into<BlinkError>,
    S: Scheduler,
{
    initialize(&mut port)?;

    let led2 = spawn_blinker(
        sched,
        "blink_led2",
        BlinkArgs {
            port: port.clone(),
            pin: LED2_PIN,
            frequency_hz: LED2_HZ,
        },
        tick_hz,
    )?;
    let led3 = spawn_blinker(
        sched,
        "blink_led3",
        BlinkArgs {
            port,
            pin: LED3_PIN,
            frequency_hz: LED3_HZ,
        },
        tick_hz,
    )?;

    Ok((led2, led3))
}
