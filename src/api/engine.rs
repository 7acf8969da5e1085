use std::sync::{Arc, PoisonError, RwLock};

use translit_core::{Registry, Transliterator};

use super::ApiError;

/// Shareable transliteration handle over the global registry.
///
/// The selected standard sits behind an `RwLock`: `transliterate` holds the
/// read guard for the whole call, so a concurrent `set_standard` can never
/// switch tables halfway through a text.
#[derive(Debug)]
pub struct TranslitEngine {
    current: RwLock<Transliterator<'static>>,
}

impl TranslitEngine {
    /// Engine using the configured default standard.
    pub fn new() -> Result<Arc<Self>, ApiError> {
        let t = Transliterator::global()?;
        Ok(Self::wrap(t))
    }

    pub fn with_standard(standard: &str) -> Result<Arc<Self>, ApiError> {
        let t = Transliterator::with_standard(Registry::global(), standard)?;
        Ok(Self::wrap(t))
    }

    fn wrap(t: Transliterator<'static>) -> Arc<Self> {
        Arc::new(Self {
            current: RwLock::new(t),
        })
    }

    pub fn set_standard(&self, standard: &str) -> Result<(), ApiError> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        current.set_standard(standard)?;
        Ok(())
    }

    pub fn standard(&self) -> String {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.standard().to_string()
    }

    pub fn transliterate(&self, text: &str) -> String {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.transliterate(text)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use translit_core::{GOST_779A, GOST_779B};

    use super::*;

    #[test]
    fn starts_on_default_standard() {
        let engine = TranslitEngine::new().unwrap();
        assert_eq!(engine.standard(), GOST_779B);
        assert_eq!(engine.transliterate("Привет, Ёж!"), "Privet, Yozh!");
    }

    #[test]
    fn set_standard_is_atomic() {
        let engine = TranslitEngine::with_standard(GOST_779A).unwrap();
        let err = engine.set_standard("bogus").unwrap_err();
        assert_eq!(
            err,
            ApiError::InvalidStandard {
                id: "bogus".to_string()
            }
        );
        assert_eq!(engine.standard(), GOST_779A);
        assert_eq!(engine.transliterate("ш"), "š");
    }

    #[test]
    fn shared_across_threads() {
        let engine = TranslitEngine::new().unwrap();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let engine = Arc::clone(&engine);
                thread::spawn(move || {
                    let id = if i % 2 == 0 { GOST_779A } else { GOST_779B };
                    engine.set_standard(id).unwrap();
                    // Whatever standard is active, a single call never mixes tables.
                    let out = engine.transliterate("ЧЧЧЧ");
                    assert!(out == "ČČČČ" || out == "ChChChCh", "mixed output {out}");
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
    }
}
