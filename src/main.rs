//! JoyBuzz - Joystick Alarm Firmware
//!
//! This binary wires the four tasks onto three Embassy executors, one per
//! priority level:
//! - SWI_IRQ_1 (NVIC P2): buzzer controller, preempts everything else
//! - SWI_IRQ_0 (NVIC P3): joystick sampler and button watcher, which
//!   share the executor and run round-robin
//! - Thread mode: dispatcher, runs whenever nothing else is ready
//!
//! Hardware: Raspberry Pi Pico (RP2040)
//! Joystick: VRY on GPIO26 (ADC0), VRX on GPIO27 (ADC1), SW on GPIO22
//! Buzzer: GPIO21

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{error, info, unwrap};
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::adc::{Adc, Blocking, Channel as AdcChannel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use panic_halt as _;
use defmt_rtt as _; // global logger
use static_cell::StaticCell;

use joybuzz::actuator::run_actuator;
use joybuzz::buttons::run_button_watcher;
use joybuzz::dispatcher::run_dispatcher;
use joybuzz::platform::rp2040::{PicoJoystick, RttConsole};
use joybuzz::platform::{PinActuator, PinButton, PlatformError};
use joybuzz::sampler::run_axis_sampler;
use joybuzz::supervisor::{self, AppSupervisor};
use joybuzz::SystemContext;

type Context = &'static SystemContext<RttConsole>;

// ===================================================================
// Executors and Shared State
// ===================================================================

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MID: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

static CONTEXT: StaticCell<SystemContext<RttConsole>> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_MID.on_interrupt()
}

// ===================================================================
// Main Application Entry Point
// ===================================================================

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());

    let supervisor = AppSupervisor::new();
    supervisor.print_startup_banner();

    // Buzzer is driven low before any task can run
    let buzzer = match PinActuator::new(Output::new(p.PIN_21, Level::Low)) {
        Ok(buzzer) => buzzer,
        Err(e) => halt("Buzzer", e),
    };
    let button = PinButton::new(Input::new(p.PIN_22, Pull::Up));
    let adc: Adc<'static, Blocking> = Adc::new_blocking(p.ADC, AdcConfig::default());
    let joystick = PicoJoystick::new(
        adc,
        AdcChannel::new_pin(p.PIN_26, Pull::None),
        AdcChannel::new_pin(p.PIN_27, Pull::None),
    );

    let ctx: Context = CONTEXT.init(SystemContext::new(RttConsole));

    // High priority: buzzer
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    unwrap!(spawner.spawn(buzzer_task(buzzer, ctx)));

    // Mid priority: producers
    interrupt::SWI_IRQ_0.set_priority(Priority::P3);
    let spawner = EXECUTOR_MID.start(interrupt::SWI_IRQ_0);
    unwrap!(spawner.spawn(joystick_task(joystick, ctx)));
    unwrap!(spawner.spawn(button_task(button, ctx)));

    supervisor.print_init_success();

    // Low priority: dispatcher in thread mode, never returns
    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(process_task(ctx)));
    })
}

/// A collaborator failure is a fatal invariant violation
fn halt(task: &str, e: PlatformError) -> ! {
    error!("{} task failed: {:?}", task, e);
    core::panic!("fatal platform error");
}

// ===================================================================
// Task Wrappers
// ===================================================================

#[embassy_executor::task]
async fn joystick_task(joystick: PicoJoystick, ctx: Context) {
    match run_axis_sampler(joystick, ctx).await {
        Ok(never) => match never {},
        Err(e) => halt(supervisor::JOYSTICK_TASK.name, e),
    }
}

#[embassy_executor::task]
async fn button_task(button: PinButton<Input<'static>>, ctx: Context) {
    match run_button_watcher(button, ctx).await {
        Ok(never) => match never {},
        Err(e) => halt(supervisor::BUTTON_TASK.name, e),
    }
}

#[embassy_executor::task]
async fn process_task(ctx: Context) {
    match run_dispatcher(ctx).await {
        Ok(never) => match never {},
        Err(e) => halt(supervisor::PROCESS_TASK.name, e),
    }
}

#[embassy_executor::task]
async fn buzzer_task(buzzer: PinActuator<Output<'static>>, ctx: Context) {
    info!("Buzzer on GPIO21, starts idle");
    match run_actuator(buzzer, ctx).await {
        Ok(never) => match never {},
        Err(e) => halt(supervisor::BUZZER_TASK.name, e),
    }
}
