//! 主机模拟演示
//!
//! 把真实的应用序列接到一个线程模拟的调度器上：每个任务一个线程，
//! 1ms 墙钟时间模拟一个节拍，引脚电平变化打印到标准输出。
//!
//! `start()` 与真机语义一致，永不返回——用 Ctrl-C 结束演示。
//!
//! ```text
//! [   +0.000s] gioPORTB direction <- 0xff
//! [   +0.000s] pin 6 -> HIGH
//! [   +0.000s] pin 7 -> HIGH
//! [   +0.166s] pin 7 -> LOW
//! [   +0.250s] pin 6 -> LOW
//! ```

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use hercules_blink::app;
use hercules_blink::config::{PORT_PINS, TICK_HZ};
use hercules_blink::error::{BlinkError, Result};
use hercules_blink::gio::{GioError, GioPort};
use hercules_blink::rtos::{DelayTicks, Scheduler, TaskConfig, TaskEntry, TaskHandle};

/// 模拟端口：电平变化打印到标准输出
#[derive(Clone)]
struct SimPort {
    state: Arc<Mutex<SimPortState>>,
    started: Instant,
}

struct SimPortState {
    direction: Option<u8>,
    levels: u8,
}

impl SimPort {
    fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SimPortState {
                direction: None,
                levels: 0,
            })),
            started: Instant::now(),
        }
    }

    fn stamp(&self) -> String {
        format!("[{:+9.3}s]", self.started.elapsed().as_secs_f64())
    }
}

impl GioPort for SimPort {
    type Error = GioError;

    fn set_direction(&mut self, mask: u8) -> std::result::Result<(), Self::Error> {
        self.state.lock().unwrap().direction = Some(mask);
        println!("{} {} direction <- {:#04x}", self.stamp(), self.name(), mask);
        Ok(())
    }

    fn set_bit(&mut self, pin: u8, level: bool) -> std::result::Result<(), Self::Error> {
        if pin >= PORT_PINS {
            return Err(GioError::PinOutOfRange);
        }
        let mut state = self.state.lock().unwrap();
        let direction = state.direction.ok_or(GioError::NotInitialized)?;
        if (direction >> pin) & 1 == 0 {
            return Err(GioError::PinNotOutput);
        }
        if level {
            state.levels |= 1 << pin;
        } else {
            state.levels &= !(1 << pin);
        }
        drop(state);
        println!(
            "{} pin {} -> {}",
            self.stamp(),
            pin,
            if level { "HIGH" } else { "LOW" }
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gioPORTB"
    }
}

/// 墙钟延时：一个节拍对应 1/TICK_HZ 秒
struct WallClockDelay {
    tick: Duration,
}

impl DelayTicks for WallClockDelay {
    fn delay_ticks(&mut self, ticks: u32) -> Result<()> {
        thread::sleep(self.tick * ticks);
        Ok(())
    }
}

/// 线程模拟的调度器：每个任务一个系统线程
struct SimScheduler {
    threads: Vec<thread::JoinHandle<()>>,
}

impl SimScheduler {
    fn new() -> Self {
        Self {
            threads: Vec::new(),
        }
    }
}

impl Scheduler for SimScheduler {
    fn create_task(&mut self, config: TaskConfig, entry: TaskEntry) -> Result<TaskHandle> {
        let handle = TaskHandle(self.threads.len());
        let name = config.get_name();
        let thread = thread::Builder::new()
            .name(name.into())
            .spawn(move || {
                let mut delay = WallClockDelay {
                    tick: Duration::from_micros(1_000_000 / TICK_HZ as u64),
                };
                if let Err(e) = entry(&mut delay) {
                    eprintln!("task {} exited: {}", name, e);
                }
            })
            // 线程创建失败是宿主资源耗尽，等价于任务栈分配失败
            .map_err(|_| BlinkError::OutOfMemory)?;
        self.threads.push(thread);
        Ok(handle)
    }

    fn start(self) -> ! {
        for thread in self.threads {
            let _ = thread.join();
        }
        // 任务永不退出；调度器如果意外走到这里，落入空转安全网
        loop {
            thread::park();
        }
    }
}

fn main() {
    let mut sched = SimScheduler::new();
    let port = SimPort::new();

    let (led2, led3) =
        app::launch(&mut sched, port, TICK_HZ).expect("failed to launch blink tasks");
    println!("launched tasks {:?} and {:?}, handing over to the scheduler", led2, led3);

    sched.start();
}
