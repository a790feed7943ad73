//! src/nav/handle.rs
//!
//! Identity-compared panel handles and the visibility capability the
//! navigator drives.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Anything that can be shown or hidden as a unit.
pub trait Displayable {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;

    /// Label used for diagnostics only.
    fn name(&self) -> &str;
}

/// Shared handle to a panel.
///
/// Equality is identity: two handles compare equal only when they point at
/// the same panel, even if both panels carry the same title and contents.
pub struct PanelHandle<D>(Rc<RefCell<D>>);

impl<D> PanelHandle<D> {
    pub fn new(panel: D) -> Self {
        Self(Rc::new(RefCell::new(panel)))
    }

    pub fn borrow(&self) -> Ref<'_, D> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, D> {
        self.0.borrow_mut()
    }
}

impl<D: Displayable> PanelHandle<D> {
    /// Owned copy of the panel's diagnostic label.
    pub fn name(&self) -> String {
        match self.0.try_borrow() {
            Ok(p) => p.name().to_string(),
            Err(_) => "<busy>".to_string(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.borrow().is_visible()
    }
}

impl<D> Clone for PanelHandle<D> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<D> PartialEq for PanelHandle<D> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<D> Eq for PanelHandle<D> {}

impl<D: Displayable> fmt::Debug for PanelHandle<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PanelHandle").field(&self.name()).finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Minimal panel used by the navigation tests.
    #[derive(Debug)]
    pub struct Stub {
        pub name: String,
        pub visible: bool,
        pub shows: usize,
        pub hides: usize,
    }

    impl Stub {
        pub fn handle(name: &str) -> PanelHandle<Stub> {
            PanelHandle::new(Stub {
                name: name.to_string(),
                visible: false,
                shows: 0,
                hides: 0,
            })
        }
    }

    impl Displayable for Stub {
        fn show(&mut self) {
            self.visible = true;
            self.shows += 1;
        }
        fn hide(&mut self) {
            self.visible = false;
            self.hides += 1;
        }
        fn is_visible(&self) -> bool {
            self.visible
        }
        fn name(&self) -> &str {
            &self.name
        }
    }

    #[test]
    fn equality_is_identity_not_content() {
        let a = Stub::handle("Settings");
        let b = Stub::handle("Settings");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn clones_share_state() {
        let a = Stub::handle("Main");
        let alias = a.clone();
        alias.borrow_mut().show();
        assert!(a.is_visible());
        assert_eq!(format!("{a:?}"), "PanelHandle(\"Main\")");
    }
}
