//! Plugin Test Utilities
//!
//! A recording plugin that captures every call it receives, so tests can
//! check exactly what the dispatcher forwarded.

use crate::plugin::capabilities::Capabilities;
use crate::plugin::error::PluginError;
use crate::plugin::types::Kwargs;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One forwarded call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Read { filename: String, kwargs: Kwargs },
    Save { filename: String, array: Value, kwargs: Kwargs },
    Show { array: Value, kwargs: Kwargs },
    AppShow,
}

/// Builds capability bundles that log their calls into a shared list
#[derive(Debug, Clone, Default)]
pub struct RecordingPlugin {
    calls: Arc<Mutex<Vec<Call>>>,
    read_result: Value,
}

impl RecordingPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value returned by `read`
    pub fn with_read_result(mut self, value: Value) -> Self {
        self.read_result = value;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn recorder(&self) -> impl Fn(Call) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |call: Call| calls.lock().unwrap().push(call)
    }

    /// read, save, show and app_show
    pub fn capabilities(&self) -> Capabilities {
        self.read_only()
            .with_save({
                let record = self.recorder();
                move |filename: &str, array: &Value, kwargs: &Kwargs| {
                    record(Call::Save {
                        filename: filename.to_string(),
                        array: array.clone(),
                        kwargs: kwargs.clone(),
                    });
                    Ok(Value::Null)
                }
            })
            .with_show({
                let record = self.recorder();
                move |array: &Value, kwargs: &Kwargs| {
                    record(Call::Show {
                        array: array.clone(),
                        kwargs: kwargs.clone(),
                    });
                    Ok(Value::Null)
                }
            })
            .with_app_show({
                let record = self.recorder();
                move || {
                    record(Call::AppShow);
                    Ok(Value::Null)
                }
            })
    }

    pub fn read_only(&self) -> Capabilities {
        let record = self.recorder();
        let result = self.read_result.clone();
        Capabilities::new().with_read(move |filename, kwargs| {
            record(Call::Read {
                filename: filename.to_string(),
                kwargs: kwargs.clone(),
            });
            Ok(result.clone())
        })
    }
}

/// A bundle whose every capability fails with an execution error
pub fn failing_plugin(name: &'static str) -> Capabilities {
    let fail = move |operation: &str| PluginError::Execution {
        plugin_name: name.to_string(),
        operation: operation.to_string(),
        cause: "backend exploded".to_string(),
    };

    Capabilities::new()
        .with_read(move |_, _| Err(fail("read")))
        .with_save(move |_, _, _| Err(fail("save")))
        .with_show(move |_, _| Err(fail("show")))
}
