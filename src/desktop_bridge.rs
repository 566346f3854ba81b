use serde_json::{json, Map, Value};

use crate::{CONFIRM_EXIT_CHANNEL, CONFIRM_EXIT_COMMAND};

const CHANNELS_PLACEHOLDER: &str = "__DESKTOP_SHELL_CHANNELS__";

const BRIDGE_SCRIPT_TEMPLATE: &str = r#"(() => {
  if (window.desktopShell) {
    return;
  }
  const channels = __DESKTOP_SHELL_CHANNELS__;
  const invoke = (channel, ...values) => {
    const route = channels[channel];
    if (!route) {
      return Promise.reject(new Error(`Unknown desktop channel: ${channel}`));
    }
    const payload = {};
    route.args.forEach((name, index) => {
      payload[name] = values[index];
    });
    return window.__TAURI_INTERNALS__.invoke(route.command, payload);
  };
  Object.defineProperty(window, "desktopShell", {
    value: Object.freeze({
      isDesktopRuntime: true,
      invoke,
      confirmExit: (message) => invoke("confirm-exit", message),
    }),
    configurable: false,
    writable: false,
  });
})();
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeChannel {
    pub channel: &'static str,
    pub command: &'static str,
    pub args: &'static [&'static str],
}

pub const BRIDGE_CHANNELS: &[BridgeChannel] = &[BridgeChannel {
    channel: CONFIRM_EXIT_CHANNEL,
    command: CONFIRM_EXIT_COMMAND,
    args: &["message"],
}];

fn channel_table() -> Value {
    let mut table = Map::new();
    for route in BRIDGE_CHANNELS {
        table.insert(
            route.channel.to_string(),
            json!({ "command": route.command, "args": route.args }),
        );
    }
    Value::Object(table)
}

pub fn bridge_script() -> String {
    BRIDGE_SCRIPT_TEMPLATE.replace(CHANNELS_PLACEHOLDER, &channel_table().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_exit_channel_routes_to_command_with_message_arg() {
        let route = BRIDGE_CHANNELS
            .iter()
            .find(|route| route.channel == "confirm-exit")
            .expect("confirm-exit should be routed");
        assert_eq!(route.command, "confirm_exit");
        assert_eq!(route.args, &["message"]);
    }

    #[test]
    fn bridge_channels_are_unique() {
        for (index, route) in BRIDGE_CHANNELS.iter().enumerate() {
            assert!(BRIDGE_CHANNELS[index + 1..]
                .iter()
                .all(|other| other.channel != route.channel));
        }
    }

    #[test]
    fn bridge_script_embeds_channel_table() {
        let script = bridge_script();
        assert!(!script.contains(CHANNELS_PLACEHOLDER));
        assert!(script.contains(r#""confirm-exit":{"#));
        assert!(script.contains(r#""command":"confirm_exit""#));
        assert!(script.contains(r#""args":["message"]"#));
        assert!(script.contains("window.__TAURI_INTERNALS__.invoke"));
    }
}
