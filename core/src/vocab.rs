//! Fixed vocabularies shared by every table.
//!
//! Output values are the Russian labels used by the downstream
//! reporting schema; they are written verbatim to files and tables.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    #[serde(rename = "Минская")]
    Minsk,
    #[serde(rename = "Гомельская")]
    Gomel,
    #[serde(rename = "Витебская")]
    Vitebsk,
    #[serde(rename = "Могилёвская")]
    Mogilev,
    #[serde(rename = "Брестская")]
    Brest,
    #[serde(rename = "Гродненская")]
    Grodno,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Minsk,
        Region::Gomel,
        Region::Vitebsk,
        Region::Mogilev,
        Region::Brest,
        Region::Grodno,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minsk   => "Минская",
            Self::Gomel   => "Гомельская",
            Self::Vitebsk => "Витебская",
            Self::Mogilev => "Могилёвская",
            Self::Brest   => "Брестская",
            Self::Grodno  => "Гродненская",
        }
    }
}

/// Sales funnel stages, in pipeline order. Only `Closed` recognises revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FunnelStage {
    #[serde(rename = "Лид")]
    Lead,
    #[serde(rename = "Контакт установлен")]
    ContactEstablished,
    #[serde(rename = "Переговоры")]
    Negotiation,
    #[serde(rename = "Предложение отправлено")]
    ProposalSent,
    #[serde(rename = "Сделка закрыта")]
    Closed,
}

impl FunnelStage {
    pub const ALL: [FunnelStage; 5] = [
        FunnelStage::Lead,
        FunnelStage::ContactEstablished,
        FunnelStage::Negotiation,
        FunnelStage::ProposalSent,
        FunnelStage::Closed,
    ];

    /// More leads than closed deals.
    pub const WEIGHTS: [f64; 5] = [0.40, 0.25, 0.15, 0.10, 0.10];

    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lead               => "Лид",
            Self::ContactEstablished => "Контакт установлен",
            Self::Negotiation        => "Переговоры",
            Self::ProposalSent       => "Предложение отправлено",
            Self::Closed             => "Сделка закрыта",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CostCategory {
    #[serde(rename = "Контекстная реклама")]
    ContextAds,
    #[serde(rename = "SEO")]
    Seo,
    #[serde(rename = "Зарплата отдела маркетинга")]
    MarketingPayroll,
    #[serde(rename = "Мероприятия")]
    Events,
    #[serde(rename = "SMM")]
    Smm,
}

impl CostCategory {
    pub const ALL: [CostCategory; 5] = [
        CostCategory::ContextAds,
        CostCategory::Seo,
        CostCategory::MarketingPayroll,
        CostCategory::Events,
        CostCategory::Smm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContextAds       => "Контекстная реклама",
            Self::Seo              => "SEO",
            Self::MarketingPayroll => "Зарплата отдела маркетинга",
            Self::Events           => "Мероприятия",
            Self::Smm              => "SMM",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductCategory {
    #[serde(rename = "Оборудование")]
    Equipment,
    #[serde(rename = "Техника")]
    Machinery,
    #[serde(rename = "Экипировка")]
    Gear,
    #[serde(rename = "Комплектующие")]
    Components,
    #[serde(rename = "Электроника")]
    Electronics,
    #[serde(rename = "Инструменты")]
    Tools,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Equipment,
        ProductCategory::Machinery,
        ProductCategory::Gear,
        ProductCategory::Components,
        ProductCategory::Electronics,
        ProductCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equipment   => "Оборудование",
            Self::Machinery   => "Техника",
            Self::Gear        => "Экипировка",
            Self::Components  => "Комплектующие",
            Self::Electronics => "Электроника",
            Self::Tools       => "Инструменты",
        }
    }
}

/// ABC value class. Label only; not computed from sales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AbcGroup {
    A,
    B,
    C,
}

impl AbcGroup {
    pub const ALL: [AbcGroup; 3] = [AbcGroup::A, AbcGroup::B, AbcGroup::C];
    pub const WEIGHTS: [f64; 3] = [0.2, 0.3, 0.5];

    /// Base unit price in BYN used to centre the revenue draw.
    pub fn base_price(&self) -> f64 {
        match self {
            Self::A => 550.0,
            Self::B => 220.0,
            Self::C => 60.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

/// XYZ demand-variability class. Label only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum XyzGroup {
    X,
    Y,
    Z,
}

impl XyzGroup {
    pub const ALL: [XyzGroup; 3] = [XyzGroup::X, XyzGroup::Y, XyzGroup::Z];
    pub const WEIGHTS: [f64; 3] = [0.3, 0.4, 0.3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

/// RFM label. Sampled, not derived from recency/frequency/monetary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RfmSegment {
    Champions,
    #[serde(rename = "Loyal Customer")]
    LoyalCustomer,
    #[serde(rename = "Potential Loyalist")]
    PotentialLoyalist,
    #[serde(rename = "New Customers")]
    NewCustomers,
    #[serde(rename = "At Risk")]
    AtRisk,
    Hibernating,
}

impl RfmSegment {
    pub const ALL: [RfmSegment; 6] = [
        RfmSegment::Champions,
        RfmSegment::LoyalCustomer,
        RfmSegment::PotentialLoyalist,
        RfmSegment::NewCustomers,
        RfmSegment::AtRisk,
        RfmSegment::Hibernating,
    ];
    pub const WEIGHTS: [f64; 6] = [0.15, 0.15, 0.2, 0.2, 0.15, 0.15];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Champions         => "Champions",
            Self::LoyalCustomer     => "Loyal Customer",
            Self::PotentialLoyalist => "Potential Loyalist",
            Self::NewCustomers      => "New Customers",
            Self::AtRisk            => "At Risk",
            Self::Hibernating       => "Hibernating",
        }
    }
}

/// Nominative Russian month name, 1-based.
pub fn month_name_ru(month: u32) -> &'static str {
    match month {
        1  => "Январь",
        2  => "Февраль",
        3  => "Март",
        4  => "Апрель",
        5  => "Май",
        6  => "Июнь",
        7  => "Июль",
        8  => "Август",
        9  => "Сентябрь",
        10 => "Октябрь",
        11 => "Ноябрь",
        12 => "Декабрь",
        _  => unreachable!("month out of range: {month}"),
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Region, FunnelStage, CostCategory, ProductCategory, AbcGroup, XyzGroup, RfmSegment);
