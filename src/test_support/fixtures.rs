//! Serialized host snapshots used across unit tests.

/// `App` resolves; `Lib` is excluded from the build; `Tests` has no active
/// configuration; `Tool` has no solution context.
pub const SOLUTION_SNAPSHOT_TOML: &str = r#"
[solution]
configuration = "Debug"
platform = "Win32"

[[contexts]]
project = "App"
configuration = "Debug"
platform = "Win32"
build = true

[[contexts]]
project = "Lib"
configuration = "Debug"
platform = "Win32"
build = false

[[contexts]]
project = "Tests"
configuration = "Debug"
platform = "Win32"

[[projects]]
unique_name = "App"
configurations = [
    { configuration = "Debug", platform = "Win32" },
    { configuration = "Release", platform = "Win32" },
]
active = { configuration = "Debug", platform = "Win32" }

[[projects]]
unique_name = "Lib"
configurations = [{ configuration = "Debug", platform = "Win32" }]
active = { configuration = "Debug", platform = "Win32" }

[[projects]]
unique_name = "Tests"
configurations = [
    { configuration = "Debug", platform = "x64" },
    { configuration = "Release", platform = "x64" },
]

[[projects]]
unique_name = "Tool"
active = { configuration = "Release", platform = "x64" }
"#;

/// A single resolvable project, as JSON.
pub const APP_SNAPSHOT_JSON: &str = r#"{
  "solution": { "configuration": "Release", "platform": "x64" },
  "contexts": [
    { "project": "App", "configuration": "Release", "platform": "x64", "build": true }
  ],
  "projects": [
    {
      "unique_name": "App",
      "configurations": [{ "configuration": "Release", "platform": "x64" }],
      "active": { "configuration": "Release", "platform": "x64" }
    }
  ]
}"#;
