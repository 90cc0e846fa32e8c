//! Application supervisor
//!
//! Owns the fixed task table and reports the system layout at start-up.

use crate::config::{
    self, ADC_ALARM_HIGH, ADC_ALARM_LOW, BUZZER_SIGNAL_MAX, BUZZER_SIGNAL_POLICY, QUEUE_CAPACITY,
};
use crate::log_info;
use crate::types::{TaskPriority, TaskSpec, APP_VERSION};

pub const JOYSTICK_TASK: TaskSpec =
    TaskSpec::new("Joystick", config::JOYSTICK_STACK_WORDS, TaskPriority::Mid);
pub const BUTTON_TASK: TaskSpec =
    TaskSpec::new("Button", config::BUTTON_STACK_WORDS, TaskPriority::Mid);
pub const PROCESS_TASK: TaskSpec =
    TaskSpec::new("Process", config::PROCESS_STACK_WORDS, TaskPriority::Low);
pub const BUZZER_TASK: TaskSpec =
    TaskSpec::new("Buzzer", config::BUZZER_STACK_WORDS, TaskPriority::High);

/// Every task started at boot, in creation order
pub static TASKS: [TaskSpec; 4] = [JOYSTICK_TASK, BUTTON_TASK, PROCESS_TASK, BUZZER_TASK];

/// Start-up reporting for the firmware
pub struct AppSupervisor {
    tasks: &'static [TaskSpec],
}

impl AppSupervisor {
    pub fn new() -> Self {
        Self { tasks: &TASKS }
    }

    /// Tasks sharing one priority level, in creation order
    pub fn tasks_at(&self, priority: TaskPriority) -> impl Iterator<Item = &'static TaskSpec> {
        self.tasks
            .iter()
            .filter(move |task| task.priority == priority)
    }

    /// Print application startup banner with the task layout
    pub fn print_startup_banner(&self) {
        log_info!("========================================");
        log_info!("JoyBuzz v{}", APP_VERSION.as_string().as_str());
        log_info!("Hardware: RP2040 (Raspberry Pi Pico)");
        log_info!("========================================");
        log_info!(
            "Joystick: VRY=GPIO{} VRX=GPIO{}",
            config::ADC_VERTICAL_PIN,
            config::ADC_HORIZONTAL_PIN
        );
        log_info!(
            "Button: GPIO{}  Buzzer: GPIO{}",
            config::BUTTON_PIN,
            config::BUZZER_PIN
        );
        log_info!("Alarm band: {}..={}", ADC_ALARM_LOW, ADC_ALARM_HIGH);
        log_info!(
            "Queue: {} messages, buzzer signal max {} ({:?})",
            QUEUE_CAPACITY,
            BUZZER_SIGNAL_MAX,
            BUZZER_SIGNAL_POLICY
        );
        // Highest level first, matching the executor start order
        for priority in [TaskPriority::High, TaskPriority::Mid, TaskPriority::Low] {
            for task in self.tasks_at(priority) {
                log_info!(
                    "Task {}: priority {}, stack {} words",
                    task.name,
                    priority.level(),
                    task.stack_words
                );
            }
        }
        log_info!("========================================");
    }

    /// Print successful initialization message
    pub fn print_init_success(&self) {
        log_info!("JoyBuzz initialized, {} tasks running", self.tasks.len());
    }
}

impl Default for AppSupervisor {
    fn default() -> Self {
        Self::new()
    }
}
