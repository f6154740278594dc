use serde::{Deserialize, Serialize};

/// Icon shown on a stat card.
///
/// Names in the configuration are kebab-case (`"dollar-sign"`). Any name not
/// listed here deserialises to `Unknown`, which the UI draws with its fallback icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    DollarSign,
    CircleDollarSign,
    LineChart,
    ShoppingBag,
    Package,
    AlertTriangle,
    Users,
    UserPlus,
    Truck,
    CheckCircle,
    MessageSquare,
    Star,
    TrendingUp,
    Repeat,
    #[serde(other)]
    Unknown,
}

/// Colour accent of the icon bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    #[default]
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
    Violet,
    Amber,
    Indigo,
    Blue,
    Green,
    Pink,
    Emerald,
    Orange,
    Yellow,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Primary => "primary",
            Accent::Secondary => "secondary",
            Accent::Accent => "accent",
            Accent::Success => "success",
            Accent::Warning => "warning",
            Accent::Error => "error",
            Accent::Violet => "violet",
            Accent::Amber => "amber",
            Accent::Indigo => "indigo",
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Pink => "pink",
            Accent::Emerald => "emerald",
            Accent::Orange => "orange",
            Accent::Yellow => "yellow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    Sales,
    Orders,
    Inventory,
    Users,
    Shipments,
    Messages,
    Reviews,
    Performance,
}

/// Direction of the month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// Static description of one KPI card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCardMeta {
    pub id: u32,
    pub title: String,
    pub value: f64,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Change relative to last month, in percent.
    #[serde(default)]
    pub percent_change: Option<f64>,
    pub icon: IconKind,
    #[serde(default)]
    pub accent: Accent,
    /// Fraction digits of the displayed value.
    #[serde(default)]
    pub decimals: u8,
    pub category: StatCategory,
}

impl StatCardMeta {
    /// Zero counts as growth.
    pub fn trend(&self) -> Option<Trend> {
        self.percent_change
            .map(|pct| if pct >= 0.0 { Trend::Up } else { Trend::Down })
    }
}

/// Cards whose id is selected, in configuration order.
pub fn visible_cards<'a>(cards: &'a [StatCardMeta], selected: &[u32]) -> Vec<&'a StatCardMeta> {
    cards
        .iter()
        .filter(|card| selected.contains(&card.id))
        .collect()
}

/// Hides a shown card or shows a hidden one.
pub fn toggle_card(selected: &mut Vec<u32>, id: u32) {
    if let Some(pos) = selected.iter().position(|s| *s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

/// First configured card that is currently hidden ("Add Metric").
pub fn next_hidden_card(cards: &[StatCardMeta], selected: &[u32]) -> Option<u32> {
    cards
        .iter()
        .map(|card| card.id)
        .find(|id| !selected.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, pct: Option<f64>) -> StatCardMeta {
        StatCardMeta {
            id,
            title: format!("Card {}", id),
            value: 1.0,
            prefix: String::new(),
            suffix: String::new(),
            percent_change: pct,
            icon: IconKind::Star,
            accent: Accent::Primary,
            decimals: 0,
            category: StatCategory::Sales,
        }
    }

    #[test]
    fn test_visible_cards_follow_configuration_order() {
        let cards: Vec<_> = (1..=5).map(|i| card(i, None)).collect();
        let shown: Vec<u32> = visible_cards(&cards, &[4, 1, 3]).iter().map(|c| c.id).collect();
        assert_eq!(shown, vec![1, 3, 4]);
    }

    #[test]
    fn test_toggle_and_add_metric() {
        let cards: Vec<_> = (1..=3).map(|i| card(i, None)).collect();
        let mut selected = vec![1, 2, 3];
        assert_eq!(next_hidden_card(&cards, &selected), None);

        toggle_card(&mut selected, 2);
        assert_eq!(selected, vec![1, 3]);
        assert_eq!(next_hidden_card(&cards, &selected), Some(2));

        toggle_card(&mut selected, 2);
        assert_eq!(selected, vec![1, 3, 2]);
    }

    #[test]
    fn test_trend() {
        assert_eq!(card(1, Some(24.5)).trend(), Some(Trend::Up));
        assert_eq!(card(1, Some(0.0)).trend(), Some(Trend::Up));
        assert_eq!(card(1, Some(-12.5)).trend(), Some(Trend::Down));
        assert_eq!(card(1, None).trend(), None);
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        #[derive(Deserialize)]
        struct IconHolder {
            icon: IconKind,
        }
        let holder: IconHolder = toml::from_str(r#"icon = "rocket""#).unwrap();
        assert_eq!(holder.icon, IconKind::Unknown);
        let holder: IconHolder = toml::from_str(r#"icon = "circle-dollar-sign""#).unwrap();
        assert_eq!(holder.icon, IconKind::CircleDollarSign);
    }
}
