//! Scope binding and call-site macros.
//!
//! [`log_scope!`](crate::log_scope) binds the enclosing module to a source
//! tag and a [`ScopeConfig`](crate::ScopeConfig) by defining a module-level
//! `log_message` factory; the per-level macros then build messages through
//! that binding. Everything here is ergonomic sugar over
//! [`LogMessage`](crate::LogMessage), it adds no behavior of its own.
//!
//! # Examples
//!
//! ```
//! use static_logger_system::{log_info, log_scope, log_warn};
//!
//! log_scope!();
//!
//! log_info!("server listening on port {}", 8080);
//! log_warn!().append("retry ").append(3).append(" of ").append(5);
//! ```

/// Bind the enclosing module to a logging scope.
///
/// Defines a module-level `log_message::<LEVEL>()` factory used by the
/// per-level macros. Invoke it once per module, in one of five forms:
///
/// - `log_scope!()` — process default config, no source prefix
/// - `log_scope!("name")` — default config, `[name] ` prefix
/// - `log_scope!(SourceType)` — default config, `[SourceType] ` prefix
/// - `log_scope!("name", CONFIG)` — explicit [`ScopeConfig`], named prefix
/// - `log_scope!(SourceType, CONFIG)` — explicit config, type-name prefix
///
/// `CONFIG` must be const-evaluable; its cutoff and enable flag become
/// const-generic arguments of the scope's messages, so suppression stays a
/// compile-time decision.
///
/// # Examples
///
/// ```
/// use static_logger_system::{log_debug, log_scope, LogLevel, ScopeConfig};
///
/// struct Planner;
/// const PLANNER_LOGGING: ScopeConfig = ScopeConfig::new(true, LogLevel::DEBUG);
/// log_scope!(Planner, PLANNER_LOGGING);
///
/// // Emitted despite the default info cutoff: this scope allows debug.
/// log_debug!("replanning {} routes", 12);
/// ```
///
/// [`ScopeConfig`]: crate::ScopeConfig
#[macro_export]
macro_rules! log_scope {
    () => {
        #[allow(dead_code)]
        fn log_message<const LEVEL: u8>() -> $crate::LogMessage<LEVEL> {
            $crate::LogMessage::new()
        }
    };
    ($tag:literal) => {
        #[allow(dead_code)]
        fn log_message<const LEVEL: u8>() -> $crate::LogMessage<LEVEL> {
            $crate::LogMessage::tagged($tag)
        }
    };
    ($source:ty) => {
        #[allow(dead_code)]
        fn log_message<const LEVEL: u8>() -> $crate::LogMessage<LEVEL> {
            $crate::LogMessage::tagged(::core::any::type_name::<$source>())
        }
    };
    ($tag:literal, $config:expr) => {
        #[allow(dead_code)]
        fn log_message<const LEVEL: u8>(
        ) -> $crate::LogMessage<LEVEL, { ($config).cutoff.raw() }, { ($config).enabled }>
        {
            $crate::LogMessage::tagged($tag)
        }
    };
    ($source:ty, $config:expr) => {
        #[allow(dead_code)]
        fn log_message<const LEVEL: u8>(
        ) -> $crate::LogMessage<LEVEL, { ($config).cutoff.raw() }, { ($config).enabled }>
        {
            $crate::LogMessage::tagged(::core::any::type_name::<$source>())
        }
    };
}

/// Build a message at an arbitrary const-evaluable level through the
/// enclosing module's [`log_scope!`](crate::log_scope) binding.
///
/// # Examples
///
/// ```
/// use static_logger_system::{log, log_scope, LogLevel};
///
/// log_scope!();
///
/// log!(LogLevel::EVAL, "epoch {} loss {:.3}", 4, 0.125);
/// log!(LogLevel::ERROR).append("exit code ").append(3);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr) => {
        log_message::<{ ($level).raw() }>()
    };
    ($level:expr, $($arg:tt)+) => {
        log_message::<{ ($level).raw() }>().append(::core::format_args!($($arg)+))
    };
}

/// Build a message at a raw numeric level outside the named hierarchy.
///
/// # Examples
///
/// ```
/// use static_logger_system::{log_custom, log_scope};
///
/// log_scope!();
///
/// // 155 sits above every named level and is rendered as [CUSTOM:155].
/// log_custom!(155, "handshake state {}", 7);
/// // 42 sits below trace and is statically suppressed by any named cutoff.
/// log_custom!(42).append("never rendered");
/// ```
#[macro_export]
macro_rules! log_custom {
    ($level:expr) => {
        log_message::<{ $level }>()
    };
    ($level:expr, $($arg:tt)+) => {
        log_message::<{ $level }>().append(::core::format_args!($($arg)+))
    };
}

/// Build a trace-level message through the module's scope binding.
#[macro_export]
macro_rules! log_trace {
    () => { $crate::log!($crate::LogLevel::TRACE) };
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::TRACE, $($arg)+) };
}

/// Build a debug-level message through the module's scope binding.
#[macro_export]
macro_rules! log_debug {
    () => { $crate::log!($crate::LogLevel::DEBUG) };
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::DEBUG, $($arg)+) };
}

/// Build an eval-level message through the module's scope binding.
#[macro_export]
macro_rules! log_eval {
    () => { $crate::log!($crate::LogLevel::EVAL) };
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::EVAL, $($arg)+) };
}

/// Build an info-level message through the module's scope binding.
///
/// # Examples
///
/// ```
/// use static_logger_system::{log_info, log_scope};
///
/// log_scope!();
///
/// log_info!("processed {} items", 100);
/// ```
#[macro_export]
macro_rules! log_info {
    () => { $crate::log!($crate::LogLevel::INFO) };
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::INFO, $($arg)+) };
}

/// Build a warn-level message through the module's scope binding.
#[macro_export]
macro_rules! log_warn {
    () => { $crate::log!($crate::LogLevel::WARN) };
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::WARN, $($arg)+) };
}

/// Build an error-level message through the module's scope binding.
#[macro_export]
macro_rules! log_error {
    () => { $crate::log!($crate::LogLevel::ERROR) };
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::ERROR, $($arg)+) };
}

/// Build a dev-level message through the module's scope binding.
///
/// `dev` sits above `error`, so these survive every named cutoff and are
/// only silenced by a disabled scope or the `global-disable` feature.
#[macro_export]
macro_rules! log_dev {
    () => { $crate::log!($crate::LogLevel::DEV) };
    ($($arg:tt)+) => { $crate::log!($crate::LogLevel::DEV, $($arg)+) };
}

#[cfg(test)]
mod tests {
    use crate::{LogLevel, LogMessage, ScopeConfig};

    // Recover the const parameters of a scope's messages for assertions.
    fn is_active<const L: u8, const C: u8, const E: bool>(
        message: LogMessage<L, C, E>,
    ) -> bool {
        std::mem::forget(message);
        LogMessage::<L, C, E>::ACTIVE
    }

    mod default_scope {
        crate::log_scope!();

        pub(super) fn info() -> crate::LogMessage<{ crate::LogLevel::INFO.raw() }> {
            crate::log_info!()
        }

        pub(super) fn trace() -> crate::LogMessage<{ crate::LogLevel::TRACE.raw() }> {
            crate::log_trace!()
        }
    }

    mod chatty_scope {
        use super::*;

        #[allow(dead_code)]
        pub(super) struct Planner;
        const SCOPE: ScopeConfig = ScopeConfig::new(true, LogLevel::DEBUG);
        crate::log_scope!(Planner, SCOPE);

        pub(super) fn debug(
        ) -> LogMessage<{ LogLevel::DEBUG.raw() }, { LogLevel::DEBUG.raw() }, true> {
            crate::log_debug!()
        }
    }

    mod muted_scope {
        use super::*;

        const SCOPE: ScopeConfig = ScopeConfig::new(false, LogLevel::TRACE);
        crate::log_scope!("muted", SCOPE);

        pub(super) fn dev(
        ) -> LogMessage<{ LogLevel::DEV.raw() }, { LogLevel::TRACE.raw() }, false> {
            crate::log_dev!()
        }
    }

    #[test]
    fn test_default_scope_follows_global_cutoff() {
        assert!(is_active(default_scope::info()));
        assert!(!is_active(default_scope::trace()));
    }

    #[test]
    fn test_scope_config_overrides_cutoff() {
        assert!(is_active(chatty_scope::debug()));
    }

    #[test]
    fn test_disabled_scope_suppresses_every_level() {
        assert!(!is_active(muted_scope::dev()));
    }
}
