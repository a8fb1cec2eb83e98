use std::time::Duration;

use global_hotkey::hotkey::HotKey;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use idiamas_types::HotkeyAction;

#[derive(Debug, thiserror::Error)]
pub enum HotkeyError {
    #[error("Hotkey manager unavailable: {0}")]
    Manager(String),

    #[error("Failed to register {name} hotkey: {reason}")]
    Register { name: &'static str, reason: String },
}

/// Registration primitive behind [`HotkeyBindings`]
pub trait HotkeyBackend {
    fn register(&self, hotkey: HotKey) -> Result<(), String>;
    fn unregister(&self, hotkey: HotKey) -> Result<(), String>;
}

impl HotkeyBackend for GlobalHotKeyManager {
    fn register(&self, hotkey: HotKey) -> Result<(), String> {
        GlobalHotKeyManager::register(self, hotkey).map_err(|e| e.to_string())
    }

    fn unregister(&self, hotkey: HotKey) -> Result<(), String> {
        GlobalHotKeyManager::unregister(self, hotkey).map_err(|e| e.to_string())
    }
}

/// Ids of the registered hotkeys. Copyable so the listener thread can match
/// events without owning the registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotkeyIds {
    pub translate: u32,
    pub quit: u32,
}

impl HotkeyIds {
    pub fn action_for(&self, id: u32) -> Option<HotkeyAction> {
        if id == self.translate {
            Some(HotkeyAction::Translate)
        } else if id == self.quit {
            Some(HotkeyAction::Quit)
        } else {
            None
        }
    }
}

/// Owned registration of the translate and quit hotkeys.
///
/// Both keys are registered on construction and unregistered on drop; the
/// process-wide hooks live exactly as long as this value.
pub struct HotkeyBindings<B: HotkeyBackend = GlobalHotKeyManager> {
    backend: B,
    translate: HotKey,
    quit: HotKey,
}

impl HotkeyBindings<GlobalHotKeyManager> {
    /// Must be called on the thread that runs the GUI event loop
    pub fn register_global(translate: HotKey, quit: HotKey) -> Result<Self, HotkeyError> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| HotkeyError::Manager(e.to_string()))?;
        Self::with_backend(manager, translate, quit)
    }
}

impl<B: HotkeyBackend> HotkeyBindings<B> {
    pub fn with_backend(backend: B, translate: HotKey, quit: HotKey) -> Result<Self, HotkeyError> {
        backend
            .register(translate)
            .map_err(|reason| HotkeyError::Register {
                name: "translate",
                reason,
            })?;

        if let Err(reason) = backend.register(quit) {
            let _ = backend.unregister(translate);
            return Err(HotkeyError::Register { name: "quit", reason });
        }

        tracing::info!("Hotkeys registered (translate: {translate:?}, quit: {quit:?})");

        Ok(Self {
            backend,
            translate,
            quit,
        })
    }

    pub fn ids(&self) -> HotkeyIds {
        HotkeyIds {
            translate: self.translate.id(),
            quit: self.quit.id(),
        }
    }
}

impl<B: HotkeyBackend> Drop for HotkeyBindings<B> {
    fn drop(&mut self) {
        for (name, hotkey) in [("translate", self.translate), ("quit", self.quit)] {
            if let Err(e) = self.backend.unregister(hotkey) {
                tracing::warn!("Failed to unregister {name} hotkey: {e}");
            }
        }
        tracing::info!("Hotkeys released");
    }
}

/// Reads hotkey events from the process-wide `global-hotkey` channel
pub struct HotkeyListener {
    ids: HotkeyIds,
}

impl HotkeyListener {
    pub fn new(ids: HotkeyIds) -> Self {
        Self { ids }
    }

    /// Wait up to `timeout` for a key press; releases and foreign ids are skipped
    pub fn next_action(&self, timeout: Duration) -> Option<HotkeyAction> {
        let event = GlobalHotKeyEvent::receiver().recv_timeout(timeout).ok()?;
        if event.state != HotKeyState::Pressed {
            return None;
        }
        let action = self.ids.action_for(event.id);
        if action.is_none() {
            tracing::debug!("Ignoring hotkey event with unknown id {}", event.id);
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingBackend {
        registered: RefCell<Vec<u32>>,
        log: std::rc::Rc<RefCell<Vec<String>>>,
        fail_on: Option<u32>,
    }

    impl HotkeyBackend for RecordingBackend {
        fn register(&self, hotkey: HotKey) -> Result<(), String> {
            if self.fail_on == Some(hotkey.id()) {
                return Err("already taken".into());
            }
            self.registered.borrow_mut().push(hotkey.id());
            self.log.borrow_mut().push(format!("register {}", hotkey.id()));
            Ok(())
        }

        fn unregister(&self, hotkey: HotKey) -> Result<(), String> {
            self.registered.borrow_mut().retain(|id| *id != hotkey.id());
            self.log.borrow_mut().push(format!("unregister {}", hotkey.id()));
            Ok(())
        }
    }

    fn key(accelerator: &str) -> HotKey {
        accelerator.parse().unwrap()
    }

    fn keys() -> (HotKey, HotKey) {
        (key("ctrl+shift+KeyI"), key("ctrl+shift+KeyQ"))
    }

    #[test]
    fn drop_releases_both_hotkeys() {
        let (translate, quit) = keys();
        let log = std::rc::Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            log: log.clone(),
            ..Default::default()
        };

        let bindings = HotkeyBindings::with_backend(backend, translate, quit).unwrap();
        assert_eq!(bindings.backend.registered.borrow().len(), 2);
        drop(bindings);

        let log = log.borrow();
        assert_eq!(log.len(), 4);
        assert!(log[2..].contains(&format!("unregister {}", translate.id())));
        assert!(log[2..].contains(&format!("unregister {}", quit.id())));
    }

    #[test]
    fn failed_quit_registration_rolls_back_translate() {
        let (translate, quit) = keys();
        let log = std::rc::Rc::new(RefCell::new(Vec::new()));
        let backend = RecordingBackend {
            log: log.clone(),
            fail_on: Some(quit.id()),
            ..Default::default()
        };

        let err = HotkeyBindings::with_backend(backend, translate, quit)
            .err()
            .expect("quit registration must fail");
        assert!(matches!(err, HotkeyError::Register { name: "quit", .. }));
        assert_eq!(
            *log.borrow(),
            vec![
                format!("register {}", translate.id()),
                format!("unregister {}", translate.id()),
            ]
        );
    }

    #[test]
    fn ids_map_to_actions() {
        let (translate, quit) = keys();
        let ids = HotkeyIds {
            translate: translate.id(),
            quit: quit.id(),
        };
        assert_eq!(ids.action_for(translate.id()), Some(HotkeyAction::Translate));
        assert_eq!(ids.action_for(quit.id()), Some(HotkeyAction::Quit));
        assert_eq!(ids.action_for(key("F9").id()), None);
    }
}
