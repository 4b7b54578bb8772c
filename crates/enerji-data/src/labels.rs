//! Header and title strings of the dashboard tables.

use enerji_grid::Language;

/// The strings one language needs to label every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLabels {
    pub nav_industry: &'static str,
    pub nav_services: &'static str,
    pub nav_transport: &'static str,
    pub nav_household: &'static str,
    pub unit_tj: &'static str,
    pub unit_pay: &'static str,
    pub col_sector: &'static str,
    pub col_consumption: &'static str,
    pub col_share: &'static str,
    pub col_nace: &'static str,
    pub col_subsector: &'static str,
    pub col_activity: &'static str,
    pub col_fuel_source: &'static str,
    pub col_vehicle_type: &'static str,
    pub col_purpose: &'static str,
    pub col_fuel_type: &'static str,
    pub all_transport_fuels: &'static str,
    pub pefa_total_use: &'static str,
    pub pefa_top_fuel: &'static str,
    pub pefa_top_sector: &'static str,
    pub pefa_table1: &'static str,
    pub pefa_table2: &'static str,
    pub total: &'static str,
    summary: &'static str,
    records: &'static str,
}

pub const TR: TableLabels = TableLabels {
    nav_industry: "Sanayi",
    nav_services: "Hizmet",
    nav_transport: "Ulaştırma",
    nav_household: "Hanehalkı",
    unit_tj: "TJ",
    unit_pay: "Pay (%)",
    col_sector: "Sektör",
    col_consumption: "Tüketim (TJ)",
    col_share: "Genel Pay (%)",
    col_nace: "NACE Kodu",
    col_subsector: "Alt Sektör Adı",
    col_activity: "Faaliyet Alanı",
    col_fuel_source: "Enerji Kaynağı",
    col_vehicle_type: "Araç Tipi",
    col_purpose: "Amaç",
    col_fuel_type: "Enerji Türü",
    all_transport_fuels: "Tüm Ulaştırma Yakıtları",
    pefa_total_use: "Toplam Nihai Kullanım",
    pefa_top_fuel: "En çok tüketilen enerji türü",
    pefa_top_sector: "En çok tüketen sektör",
    pefa_table1: "Ekonomik Faaliyetlere Göre Tüketim",
    pefa_table2: "Nihai Kullanımda Enerji Türü Payları",
    total: "Toplam",
    summary: "Sektörel Özet Tablosu",
    records: "Kayıt",
};

pub const EN: TableLabels = TableLabels {
    nav_industry: "Industry",
    nav_services: "Services",
    nav_transport: "Transport",
    nav_household: "Household",
    unit_tj: "TJ",
    unit_pay: "Share (%)",
    col_sector: "Sector",
    col_consumption: "Consumption (TJ)",
    col_share: "Overall Share (%)",
    col_nace: "NACE Code",
    col_subsector: "Sub-Sector Name",
    col_activity: "Activity Field",
    col_fuel_source: "Energy Source",
    col_vehicle_type: "Vehicle Type",
    col_purpose: "Purpose",
    col_fuel_type: "Fuel Type",
    all_transport_fuels: "All Transport Fuels",
    pefa_total_use: "Total Final Use",
    pefa_top_fuel: "Most consumed fuel",
    pefa_top_sector: "Top consuming sector",
    pefa_table1: "Consumption by Economic Activities",
    pefa_table2: "Fuel Shares in Final Use",
    total: "Total",
    summary: "Sectoral Summary Table",
    records: "Records",
};

/// Labels for `language`.
pub fn labels(language: Language) -> &'static TableLabels {
    match language {
        Language::Tr => &TR,
        Language::En => &EN,
    }
}

impl TableLabels {
    /// Title of the overview summary table for the given fuel label.
    pub fn table_summary(&self, fuel: &str) -> String {
        format!("{} ({fuel})", self.summary)
    }

    /// Record count shown under a table: `7 Kayıt`, `7 Records`.
    pub fn record_count(&self, count: usize) -> String {
        format!("{count} {}", self.records)
    }
}
