//! Sectionfile demo driver.
//!
//! Writes a nested `Logging` section, a scalar `AllowedHosts` section, and
//! a typed `ApplicationOptions` section into one settings file, then reads
//! everything back through a [`ConfigView`] snapshot.
//!
//! Usage:
//!   cargo run -p sectionfile_cli [-- path/to/settings.json]

use anyhow::Result;
use serde::Serialize;
use uuid::Uuid;

use sectionfile_core::logging::init_tracing;
use sectionfile_core::store::SectionStore;
use sectionfile_core::view::{Bindable, BoundScalar, ConfigView, FieldSpec, ScalarKind};

#[derive(Debug, Serialize)]
struct LoggingSettings {
    #[serde(rename = "LogLevel")]
    log_level: LogLevelSettings,
}

#[derive(Debug, Serialize)]
struct LogLevelSettings {
    #[serde(rename = "Default")]
    default: String,
    #[serde(rename = "Hmm")]
    hmm: String,
}

#[derive(Debug, Default, Serialize)]
struct ApplicationOptions {
    #[serde(rename = "MyString")]
    my_string: String,
    #[serde(rename = "MyNumber")]
    my_number: i64,
    #[serde(rename = "MyBool")]
    my_bool: bool,
    #[serde(rename = "MyDouble")]
    my_double: f64,
    #[serde(rename = "MyGuid")]
    my_guid: Uuid,
}

impl Bindable for ApplicationOptions {
    fn field_specs() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                field: "my_string",
                key: "MyString",
                kind: ScalarKind::Text,
            },
            FieldSpec {
                field: "my_number",
                key: "MyNumber",
                kind: ScalarKind::Integer,
            },
            FieldSpec {
                field: "my_bool",
                key: "MyBool",
                kind: ScalarKind::Bool,
            },
            FieldSpec {
                field: "my_double",
                key: "MyDouble",
                kind: ScalarKind::Float,
            },
            FieldSpec {
                field: "my_guid",
                key: "MyGuid",
                kind: ScalarKind::Uuid,
            },
        ]
    }

    fn set_field(&mut self, field: &'static str, value: BoundScalar) {
        match (field, value) {
            ("my_string", BoundScalar::Text(v)) => self.my_string = v,
            ("my_number", BoundScalar::Integer(v)) => self.my_number = v,
            ("my_bool", BoundScalar::Bool(v)) => self.my_bool = v,
            ("my_double", BoundScalar::Float(v)) => self.my_double = v,
            ("my_guid", BoundScalar::Uuid(v)) => self.my_guid = v,
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    init_tracing(tracing::Level::INFO);

    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "appsettings.json".to_string());

    let mut store = SectionStore::open(target);

    store.add_section(
        "Logging",
        &LoggingSettings {
            log_level: LogLevelSettings {
                default: "Information".to_string(),
                hmm: "Warning".to_string(),
            },
        },
    )?;

    store.add_section("AllowedHosts", "*")?;

    let options = ApplicationOptions {
        my_string: "Current value is 1".to_string(),
        my_number: 314,
        my_bool: true,
        my_double: 3.1425,
        my_guid: Uuid::new_v4(),
    };
    store.add_section("ApplicationOptions", &options)?;

    // One snapshot for all readback
    let view = ConfigView::from_document(store.load_document()?);

    println!(
        "LogLevel.Default: {}",
        view.get("Logging.LogLevel.Default").unwrap_or_default()
    );
    println!(
        "LogLevel.Hmm: {}",
        view.get("Logging.LogLevel.Hmm").unwrap_or_default()
    );
    println!(
        "AllowedHosts: {}",
        view.get("AllowedHosts").unwrap_or_default()
    );

    let read_back: ApplicationOptions = view.bind("ApplicationOptions")?;
    println!("ApplicationOptions.MyString: {}", read_back.my_string);
    println!("ApplicationOptions.MyNumber: {}", read_back.my_number);
    println!("ApplicationOptions.MyGuid: {}", read_back.my_guid);

    Ok(())
}
