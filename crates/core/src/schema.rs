//! Fixed table schemas for vehicle records and market observations.

/// Logical column type. Storage backends map these to native types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

/// One column of a [`TableSchema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub column_type: ColumnType,
    /// Surrogate key, generated by the database and never supplied on append.
    pub primary_key: bool,
}

impl ColumnDef {
    const fn key(name: &'static str) -> Self {
        Self { name, column_type: ColumnType::Integer, primary_key: true }
    }

    const fn data(name: &'static str, column_type: ColumnType) -> Self {
        Self { name, column_type, primary_key: false }
    }
}

/// A table name together with its ordered columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

pub const CAR_DATA_TABLE: &str = "car_data";
pub const CONSUMER_DATA_TABLE: &str = "consumer_data";

/// Vehicle records: one row per make/model/year configuration.
pub const CAR_DATA: TableSchema = TableSchema {
    name: CAR_DATA_TABLE,
    columns: &[
        ColumnDef::key("Id"),
        ColumnDef::data("Make", ColumnType::Text),
        ColumnDef::data("Model", ColumnType::Text),
        ColumnDef::data("Year", ColumnType::Integer),
        ColumnDef::data("Price", ColumnType::Integer),
        ColumnDef::data("Engine_Type", ColumnType::Text),
    ],
};

/// Market observations. Joins to [`CAR_DATA`] on (`Make`, `Model`) without a declared
/// foreign key.
pub const CONSUMER_DATA: TableSchema = TableSchema {
    name: CONSUMER_DATA_TABLE,
    columns: &[
        ColumnDef::key("Id"),
        ColumnDef::data("Country", ColumnType::Text),
        ColumnDef::data("Make", ColumnType::Text),
        ColumnDef::data("Model", ColumnType::Text),
        ColumnDef::data("Year", ColumnType::Integer),
        ColumnDef::data("Review_Score", ColumnType::Float),
        ColumnDef::data("Sales_Volume", ColumnType::Integer),
    ],
};

/// Tables in the order they are provisioned.
pub const PROVISION_ORDER: [TableSchema; 2] = [CONSUMER_DATA, CAR_DATA];

impl TableSchema {
    /// Look up one of the known schemas by table name.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        PROVISION_ORDER.into_iter().find(|schema| schema.name == name)
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns supplied by input files, i.e. everything but the surrogate key.
    pub fn data_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().filter(|c| !c.primary_key).map(|c| c.name)
    }
}
