//! Глобальный pluggable logger
//!
//! Контроллер — библиотека: хост (client, headless bin, тесты) решает куда
//! идёт вывод, подменяя printer через `set_printer`. По умолчанию printer
//! не установлен и логирование no-op.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static PRINTER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Приёмник лог-строк (console, файл, тестовый буфер)
pub trait LogPrinter: Send + Sync {
    fn print(&self, level: LogLevel, message: &str);
}

pub fn set_printer(printer: Box<dyn LogPrinter>) {
    *PRINTER.lock().unwrap() = Some(printer);
}

/// Установить printer только если ещё не установлен (idempotent init)
pub fn set_printer_if_needed(printer: Box<dyn LogPrinter>) {
    let mut slot = PRINTER.lock().unwrap();
    if slot.is_none() {
        *slot = Some(printer);
    }
}

pub fn set_level(level: LogLevel) {
    *LEVEL.lock().unwrap() = level;
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

/// Единственная воронка: фильтр по уровню + timestamp добавляются здесь,
/// printer получает уже готовую строку
pub fn log_with_level(level: LogLevel, message: &str) {
    if level < *LEVEL.lock().unwrap() {
        return;
    }
    if let Some(printer) = PRINTER.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        printer.print(level, &format!("[{}] {}", timestamp, message));
    }
}

/// Console printer (stdout) — default для headless bin и клиента
pub struct ConsolePrinter;

impl LogPrinter for ConsolePrinter {
    fn print(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_console_logger() {
    set_printer_if_needed(Box::new(ConsolePrinter));
}
