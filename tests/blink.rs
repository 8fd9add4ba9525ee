//! 端到端测试：用 mock 协作方驱动完整的应用序列

use hercules_blink::app::{self, BlinkArgs};
use hercules_blink::config::{LED2_HZ, LED2_PIN, LED3_HZ, LED3_PIN, TICK_HZ};
use hercules_blink::error::BlinkError;
use hercules_blink::gio::mock::MockGioPort;
use hercules_blink::gio::GioPort;
use hercules_blink::rtos::mock::{MockScheduler, SpawnRecord};
use hercules_blink::rtos::TaskHandle;

#[test]
fn test_launch_registers_two_tasks() {
    let mut sched = MockScheduler::new();
    let port = MockGioPort::new("gioPORTB");

    let (led2, led3) = app::launch(&mut sched, port.clone(), TICK_HZ).unwrap();

    // 端口方向先于任务创建被配置为全输出
    assert_eq!(port.direction(), Some(0xFF));

    // 恰好两次创建请求，栈 128 字、优先级 1
    assert_eq!(led2, TaskHandle(0));
    assert_eq!(led3, TaskHandle(1));
    assert_eq!(
        sched.spawn_records(),
        [
            SpawnRecord {
                name: "blink_led2",
                stack_words: 128,
                priority: 1,
            },
            SpawnRecord {
                name: "blink_led3",
                stack_words: 128,
                priority: 1,
            },
        ]
    );
}

#[test]
fn test_launched_tasks_toggle_their_own_pins() {
    let mut sched = MockScheduler::new();
    let port = MockGioPort::new("gioPORTB");

    let (led2, led3) = app::launch(&mut sched, port.clone(), TICK_HZ).unwrap();

    // LED2 任务：6 号脚，半周期 250 节拍
    let run = sched.run_task(led2, 4).unwrap();
    assert_eq!(run.delays, [250, 250, 250, 250]);
    assert_eq!(run.exit, Err(BlinkError::SchedulerStopped));
    assert_eq!(port.writes_for(LED2_PIN), [true, false, true, false]);
    assert!(port.writes_for(LED3_PIN).is_empty());

    // LED3 任务：7 号脚，半周期 166 节拍（整数截断，预期行为）
    let run = sched.run_task(led3, 3).unwrap();
    assert_eq!(run.delays, [166, 166, 166]);
    assert_eq!(port.writes_for(LED3_PIN), [true, false, true]);

    // LED2 的记录不受 LED3 运行影响
    assert_eq!(port.writes_for(LED2_PIN), [true, false, true, false]);
}

#[test]
fn test_launch_surfaces_task_creation_failure() {
    // 第二个任务创建失败时，错误必须上抛而不是被丢弃
    let mut sched = MockScheduler::with_capacity(1);
    let port = MockGioPort::new("gioPORTB");

    let err = app::launch(&mut sched, port, TICK_HZ).err();
    assert_eq!(err, Some(BlinkError::TaskSlotsFull));
    assert_eq!(sched.task_count(), 1);
}

#[test]
fn test_launch_surfaces_allocation_failure() {
    // 任务上下文分配失败必须中止创建并上抛，而不是带着空上下文继续
    let mut sched = MockScheduler::new();
    sched.set_out_of_memory(true);
    let port = MockGioPort::new("gioPORTB");

    let err = app::launch(&mut sched, port, TICK_HZ).err();
    assert_eq!(err, Some(BlinkError::OutOfMemory));
    assert_eq!(sched.task_count(), 0);
}

#[test]
fn test_spawn_blinker_rejects_degenerate_frequency_before_create() {
    let mut sched = MockScheduler::new();
    let mut port = MockGioPort::new("gioPORTB");
    port.set_direction(0xFF).unwrap();

    let err = app::spawn_blinker(
        &mut sched,
        "too_fast",
        BlinkArgs {
            port,
            pin: 3,
            frequency_hz: TICK_HZ, // 2 × f > tick_hz，半周期为 0
        },
        TICK_HZ,
    )
    .err();

    assert_eq!(err, Some(BlinkError::DegenerateHalfPeriod));
    // 坏参数不会留下半成品任务
    assert_eq!(sched.task_count(), 0);
}

#[test]
fn test_spawned_args_do_not_alias() {
    let mut sched = MockScheduler::new();
    let port = MockGioPort::new("gioPORTB");

    let (led2, led3) = app::launch(&mut sched, port.clone(), TICK_HZ).unwrap();

    // 先把一个任务推进到奇数步，另一个任务的状态机必须仍从高电平开始
    sched.run_task(led2, 1).unwrap();
    let run = sched.run_task(led3, 1).unwrap();

    assert_eq!(port.writes_for(LED2_PIN), [true]);
    assert_eq!(port.writes_for(LED3_PIN), [true]);
    assert_eq!(run.delays, [166]);
}

#[test]
fn test_configured_frequencies_match_firmware() {
    // 固件常量本身也是契约的一部分
    assert_eq!((LED2_PIN, LED2_HZ), (6, 2));
    assert_eq!((LED3_PIN, LED3_HZ), (7, 3));
    assert_eq!(TICK_HZ, 1000);
}
