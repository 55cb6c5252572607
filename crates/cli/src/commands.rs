use clap::{Subcommand, ValueEnum};

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a filter into its SQL operator and bound parameter
    Convert {
        #[arg(long, help = "Filter in request form, e.g. `eq:42` or `in:a;b;c`")]
        filter: String,

        #[arg(long, help = "Declared value type of the field, e.g. NUMBER")]
        value_type: String,

        #[arg(long, default_value = "filteredItem", help = "UID of the filtered item")]
        uid: String,

        #[arg(long, value_enum, default_value_t = ItemKindArg::Attribute)]
        kind: ItemKindArg,
    },
    /// Show which relationship item fields a `fields` parameter selects
    Fields {
        #[arg(long, help = "Comma-separated field paths, e.g. trackedEntity.attributes,event")]
        fields: String,

        #[arg(long, help = "Path separator, overrides TRACKER_FIELD_PATH_SEPARATOR")]
        separator: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ItemKindArg {
    Attribute,
    DataElement,
}
