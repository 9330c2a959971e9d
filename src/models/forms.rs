// ============================================================================
// FORMULARIOS - Estado local + validación previa al envío simulado
// ============================================================================
// Cada formulario valida en el mismo orden en que la vista muestra los avisos;
// el primer campo que falte bloquea el envío.
// ============================================================================

use crate::error::{AppError, AppResult};

/// Importes predefinidos del formulario de donación
pub const PRESET_AMOUNTS: [u32; 5] = [10, 25, 50, 100, 250];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountChoice {
    #[default]
    Unselected,
    Preset(u32),
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    PayPal,
}

impl PaymentMethod {
    pub fn value(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "credit-card",
            PaymentMethod::PayPal => "paypal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }
}

/// Fondos ofrecidos en "Support a Specific Cause" (valor, texto)
pub const CAUSES: [(&str, &str); 5] = [
    ("hurricane", "Hurricane Relief"),
    ("wildfire", "Wildfire Recovery"),
    ("flood", "Flood Response"),
    ("earthquake", "Earthquake Aid"),
    ("general", "General Disaster Fund"),
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DonationForm {
    pub amount: AmountChoice,
    pub custom_amount: String,
    pub donor_name: String,
    pub email: String,
    pub phone: String,
    pub payment_method: PaymentMethod,
    pub monthly: bool,
    pub anonymous: bool,
    pub cause: String,
    pub message: String,
}

impl DonationForm {
    /// Elegir un importe fijo (o "Custom") vacía el importe libre
    pub fn select_amount(&mut self, choice: AmountChoice) {
        self.amount = choice;
        self.custom_amount.clear();
    }

    /// Escribir un importe libre cambia la selección a "Custom"
    pub fn set_custom_amount(&mut self, value: String) {
        self.custom_amount = value;
        self.amount = AmountChoice::Custom;
    }

    /// "Support This Cause": 50 y la causa de la campaña
    pub fn support_cause(&mut self, cause: String) {
        self.select_amount(AmountChoice::Preset(50));
        self.cause = cause;
    }

    /// Importe efectivo en texto, si lo hay
    pub fn amount_text(&self) -> Option<String> {
        match self.amount {
            AmountChoice::Unselected => None,
            AmountChoice::Preset(value) => Some(value.to_string()),
            AmountChoice::Custom => {
                let trimmed = self.custom_amount.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.amount_text().is_none() {
            return Err(AppError::validation("Please select or enter a donation amount"));
        }
        if self.donor_name.trim().is_empty() && !self.anonymous {
            return Err(AppError::validation(
                "Please enter your name or choose to donate anonymously",
            ));
        }
        if self.email.trim().is_empty() {
            return Err(AppError::validation("Please enter your email address"));
        }
        Ok(())
    }
}

/// Recogida de donaciones en especie
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SupplyPickupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup_date: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub items: String,
}

impl SupplyPickupForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&self.name, "Please enter your name")?;
        require(&self.email, "Please enter your email address")?;
        require(&self.items, "Please list the items you wish to donate")
    }
}

/// Formulario de contacto del centro de ayuda
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&self.name, "Please enter your name")?;
        require(&self.email, "Please enter your email address")?;
        require(&self.message, "Please enter a message")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscussionPostForm {
    pub title: String,
    pub content: String,
}

impl DiscussionPostForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&self.title, "Please give your post a title")?;
        require(&self.content, "Please write something before posting")
    }
}

/// Tipos ofrecidos en el alta de alertas del panel admin
pub const ALERT_TYPES: [(&str, &str); 5] = [
    ("weather", "Weather"),
    ("fire", "Fire"),
    ("geological", "Geological"),
    ("health", "Health"),
    ("security", "Security"),
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewAlertForm {
    pub title: String,
    pub kind: String,
    pub severity: String,
    pub location: String,
    pub description: String,
    pub instructions: String,
}

impl NewAlertForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&self.title, "Please enter an alert title")?;
        require(&self.kind, "Please select an alert type")?;
        if crate::models::Severity::parse(&self.severity).is_none() {
            return Err(AppError::validation("Please select a severity"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&self.email, "Please enter your email address")?;
        require(&self.password, "Please enter your password")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&self.name, "Please enter your name")?;
        require(&self.email, "Please enter your email address")?;
        require(&self.password, "Please choose a password")?;
        if self.password != self.confirm_password {
            return Err(AppError::validation("Passwords do not match"));
        }
        Ok(())
    }
}

/// Datos editables del perfil
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub contacts: [EmergencyContact; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relation: String,
}

impl ProfileForm {
    /// Perfil de demostración, con nombre y email cacheados si existen
    pub fn seeded(user_name: Option<&str>, user_email: Option<&str>) -> Self {
        Self {
            name: user_name.unwrap_or("John Doe").to_string(),
            email: user_email.unwrap_or("john@example.com").to_string(),
            phone: "(555) 123-4567".into(),
            address: "123 Main St".into(),
            city: "Lincoln".into(),
            state: "Nebraska".into(),
            zip_code: "68508".into(),
            contacts: [
                EmergencyContact {
                    name: "Jane Doe".into(),
                    phone: "(555) 987-6543".into(),
                    relation: "Spouse".into(),
                },
                EmergencyContact {
                    name: "Bob Smith".into(),
                    phone: "(555) 456-7890".into(),
                    relation: "Brother".into(),
                },
            ],
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        require(&self.name, "Please enter your name")?;
        require(&self.email, "Please enter your email address")
    }
}

/// Canales y tipos de notificación del perfil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationSetting {
    EmailAlerts,
    PushAlerts,
    SmsAlerts,
    EmailUpdates,
    PushUpdates,
    SmsUpdates,
    Emergency,
    Weather,
    Community,
    Recovery,
    Volunteer,
}

impl NotificationSetting {
    pub fn channels() -> [NotificationSetting; 6] {
        use NotificationSetting::*;
        [EmailAlerts, PushAlerts, SmsAlerts, EmailUpdates, PushUpdates, SmsUpdates]
    }

    pub fn alert_types() -> [NotificationSetting; 5] {
        use NotificationSetting::*;
        [Emergency, Weather, Community, Recovery, Volunteer]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationSetting::EmailAlerts => "Email Alerts",
            NotificationSetting::PushAlerts => "Push Notifications",
            NotificationSetting::SmsAlerts => "SMS Alerts",
            NotificationSetting::EmailUpdates => "Email Updates",
            NotificationSetting::PushUpdates => "Push Notifications",
            NotificationSetting::SmsUpdates => "SMS Updates",
            NotificationSetting::Emergency => "Emergency Alerts",
            NotificationSetting::Weather => "Weather Alerts",
            NotificationSetting::Community => "Community Updates",
            NotificationSetting::Recovery => "Recovery Resources",
            NotificationSetting::Volunteer => "Volunteer Opportunities",
        }
    }

    /// Valor inicial de cada preferencia
    pub fn default_enabled(&self) -> bool {
        !matches!(
            self,
            NotificationSetting::PushUpdates
                | NotificationSetting::SmsUpdates
                | NotificationSetting::Volunteer
        )
    }
}

fn require(value: &str, message: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        Err(AppError::validation(message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: AppResult<()>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn donation_requires_amount_first() {
        let form = DonationForm::default();
        assert_eq!(message(form.validate()), "Please select or enter a donation amount");
    }

    #[test]
    fn custom_amount_must_not_be_blank() {
        let mut form = DonationForm::default();
        form.select_amount(AmountChoice::Custom);
        assert!(form.amount_text().is_none());
        form.set_custom_amount("75".into());
        assert_eq!(form.amount_text().as_deref(), Some("75"));
    }

    #[test]
    fn anonymous_donation_skips_name() {
        let mut form = DonationForm::default();
        form.select_amount(AmountChoice::Preset(25));
        assert_eq!(
            message(form.validate()),
            "Please enter your name or choose to donate anonymously"
        );
        form.anonymous = true;
        assert_eq!(message(form.validate()), "Please enter your email address");
        form.email = "donor@example.com".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn selecting_preset_clears_custom_amount() {
        let mut form = DonationForm::default();
        form.set_custom_amount("12".into());
        form.select_amount(AmountChoice::Preset(10));
        assert!(form.custom_amount.is_empty());
        assert_eq!(form.amount_text().as_deref(), Some("10"));
    }

    #[test]
    fn support_cause_sets_fifty() {
        let mut form = DonationForm::default();
        form.support_cause("wildfire".into());
        assert_eq!(form.amount, AmountChoice::Preset(50));
        assert_eq!(form.cause, "wildfire");
    }

    #[test]
    fn contact_form_requires_message() {
        let form = ContactForm {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            message: "   ".into(),
        };
        assert_eq!(message(form.validate()), "Please enter a message");
    }

    #[test]
    fn signup_passwords_must_match() {
        let form = SignupForm {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            password: "pw".into(),
            confirm_password: "pw2".into(),
        };
        assert_eq!(message(form.validate()), "Passwords do not match");
    }

    #[test]
    fn new_alert_requires_known_severity() {
        let mut form = NewAlertForm {
            title: "Heat Advisory".into(),
            kind: "weather".into(),
            ..NewAlertForm::default()
        };
        assert_eq!(message(form.validate()), "Please select a severity");
        form.severity = "high".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn profile_seed_uses_cached_fields() {
        let seeded = ProfileForm::seeded(Some("Jane"), None);
        assert_eq!(seeded.name, "Jane");
        assert_eq!(seeded.email, "john@example.com");
    }
}
