// Input binding configuration and remapping

use super::action::{default_bindings, Control, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys/buttons) to controls
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from input sources to controls
    bindings: HashMap<InputSource, Control>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Control)>) -> Self {
        let mut config = Self::new();
        for (source, control) in bindings {
            config.bind(source, control);
        }
        config
    }

    /// Bind an input source to a control, replacing any previous binding of that source
    pub fn bind(&mut self, source: InputSource, control: Control) {
        if let Some(previous) = self.bindings.insert(source, control) {
            log::debug!("Rebound {:?} from {:?} to {:?}", source, previous, control);
        }
    }

    /// Get the control bound to an input source
    pub fn get_control(&self, source: InputSource) -> Option<Control> {
        self.bindings.get(&source).copied()
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
