//! Pluggable logger симуляции
//!
//! Хост (движок, headless binary, тесты) ставит свой `LogPrinter`,
//! симуляция пишет через `crate::log*`. Без установленного printer'а
//! сообщения молча отбрасываются.
//!
//! Уровни в этом crate:
//! - Debug: решения WanderAi, отклонённые атаки, урон, подбор монет
//!   (пишутся каждый тик, в headless прогоне обычно отсекаются)
//! - Info: смерть, деспавн, смена игрока в сессии, переходы между сценами
//! - Warning: команды без ActorCombatState, дубликат игрока, pickup не на монету
//! - Error: загрузка конфига
//!
//! `LOGGER_LEVEL` реально фильтрует: сообщения ниже порога до printer'а
//! не доходят. Отравленный mutex не роняет симуляцию, сообщение теряется.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

/// Порог: сообщения ниже уровня не доходят до printer'а
pub static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    if let Ok(mut slot) = LOGGER.lock() {
        *slot = Some(logger);
    }
}

pub fn set_log_level(level: LogLevel) {
    if let Ok(mut current) = LOGGER_LEVEL.lock() {
        *current = level;
    }
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    if let Ok(mut slot) = LOGGER.lock() {
        if slot.is_none() {
            *slot = Some(logger);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    let threshold = match LOGGER_LEVEL.lock() {
        Ok(threshold) => *threshold,
        Err(_) => return,
    };
    if level < threshold {
        return;
    }

    // Timestamp добавляем здесь, printer'ы получают готовую строку
    if let Ok(slot) = LOGGER.lock() {
        if let Some(logger) = slot.as_ref() {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            logger.log(level, &format!("[{}] {}", timestamp, message));
        }
    }
}

/// stdout printer (headless binary, тесты)
pub struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    /// Printer, складывающий сообщения в общий Vec
    struct CapturingLogger(std::sync::Arc<Mutex<Vec<String>>>);

    impl LogPrinter for CapturingLogger {
        fn log(&self, level: LogLevel, message: &str) {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(format!("{} {}", level.as_str(), message));
            }
        }
    }

    #[test]
    fn test_threshold_filters_lower_levels() {
        let lines = std::sync::Arc::new(Mutex::new(Vec::new()));
        set_logger(Box::new(CapturingLogger(lines.clone())));
        set_log_level(LogLevel::Warning);

        log("threshold-check debug line");
        log_info("threshold-check info line");
        log_warning("threshold-check warning line");

        set_log_level(LogLevel::Debug);

        let lines = lines.lock().expect("capture lock");
        let ours: Vec<&String> = lines.iter().filter(|line| line.contains("threshold-check")).collect();
        assert_eq!(ours.len(), 1);
        assert!(ours[0].starts_with("WARNING"));
    }

    #[test]
    fn test_log_level_names() {
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }
}
