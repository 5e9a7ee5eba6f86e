use crate::error::MathError;

/// Installs the platform log backend for the `log` facade.
///
/// Native builds use `env_logger` (filtered by `RUST_LOG`), wasm builds route
/// to the browser console. Calling it again once a logger is set is an error,
/// not a panic.
pub fn init() -> Result<(), MathError> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Info)
                .map_err(|e| MathError::Logger(e.to_string()))?;
        } else {
            env_logger::try_init().map_err(|e| MathError::Logger(e.to_string()))?;
        }
    }

    log::debug!("Logger initialized");
    Ok(())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        // whichever test thread gets here first installs the logger
        let _ = init();
        assert!(matches!(init(), Err(MathError::Logger(_))));
    }
}
