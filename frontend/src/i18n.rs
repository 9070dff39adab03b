use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    De,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::De];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
        }
    }

    /// Parses a bare language code, case-insensitive. Region tags are not
    /// accepted here, see `locale::language_for_browser` for those.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "es" => Some(Language::Es),
            "de" => Some(Language::De),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub coming_soon: &'static str,
    pub title1: &'static str,
    pub title2: &'static str,
    pub subtitle: &'static str,
    pub price_tag: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub notice_label: &'static str,
    pub notice: &'static str,
    pub button: &'static str,
    pub success_title: &'static str,
    pub default_welcome: &'static str,
    pub register_another: &'static str,
    pub error_message: &'static str,
    pub legal_notice: &'static str,
    pub privacy_policy: &'static str,
    pub cookies_policy: &'static str,
    pub legal_body: &'static str,
    pub privacy_body: &'static str,
    pub cookies_body: &'static str,
    pub close: &'static str,
    pub cookie_title: &'static str,
    pub cookie_desc: &'static str,
    pub cookie_accept: &'static str,
    pub cookie_reject: &'static str,
    pub restricted_title: &'static str,
    pub restricted_desc: &'static str,
    pub restricted_action: &'static str,
    pub footer_rights: &'static str,
    pub brand_name: &'static str,
}

pub static EN: Translations = Translations {
    coming_soon: "Coming Soon",
    title1: "The space to talk.",
    title2: "The support to grow.",
    subtitle: "Connect with empathetic mentors for affordable, personalized well-being support and emotional growth.",
    price_tag: "Growth sessions for just €20.",
    name_placeholder: "Your full name",
    email_placeholder: "Your email",
    notice_label: "Notice:",
    notice: "Pluravita is a coaching and well-being connection platform. We do not provide clinical therapy or medical services.",
    button: "Join the Waitlist",
    success_title: "You're in!",
    default_welcome: "Thank you for joining Pluravita. We'll be in touch soon to start growing together.",
    register_another: "Register another person",
    error_message: "Something went wrong. Please try again in a moment.",
    legal_notice: "Legal Notice",
    privacy_policy: "Privacy Policy",
    cookies_policy: "Cookies Policy",
    legal_body: "Pluravita is a coaching and well-being community currently in pre-launch. Joining the waitlist creates no contract and no obligation to purchase.",
    privacy_body: "We only collect your name, email address and preferred language to contact you about the launch. Your data is processed by our form provider and is never sold.",
    cookies_body: "We use strictly necessary local storage to remember your cookie decision. No advertising cookies are set.",
    close: "Close",
    cookie_title: "We use cookies",
    cookie_desc: "To provide a safe and supportive coaching experience, we use cookies. Acceptance is required to access Pluravita.",
    cookie_accept: "Accept & Continue",
    cookie_reject: "Reject All",
    restricted_title: "Access Restricted",
    restricted_desc: "To ensure your safety and the platform's security, we require cookie usage. You cannot access Pluravita without accepting our policy.",
    restricted_action: "I've changed my mind, accept cookies",
    footer_rights: "All rights reserved.",
    brand_name: "Pluravita Community",
};

pub static ES: Translations = Translations {
    coming_soon: "Próximamente",
    title1: "El espacio para hablar.",
    title2: "El apoyo para crecer.",
    subtitle: "Conecta con mentores empáticos para obtener apoyo en bienestar y crecimiento emocional de forma asequible y personalizada.",
    price_tag: "Sesiones de apoyo por solo 20€.",
    name_placeholder: "Tu nombre completo",
    email_placeholder: "Tu correo electrónico",
    notice_label: "Aviso:",
    notice: "Pluravita es una plataforma de conexión de bienestar. No proporcionamos terapia clínica ni servicios médicos.",
    button: "Unirse a la lista",
    success_title: "¡Ya estás dentro!",
    default_welcome: "Gracias por unirte a Pluravita. Pronto nos pondremos en contacto contigo para empezar a crecer juntos.",
    register_another: "Registrar a otra persona",
    error_message: "Algo salió mal. Inténtalo de nuevo en un momento.",
    legal_notice: "Aviso Legal",
    privacy_policy: "Privacidad",
    cookies_policy: "Cookies",
    legal_body: "Pluravita es una comunidad de coaching y bienestar en fase de prelanzamiento. Unirse a la lista de espera no crea ningún contrato ni obligación de compra.",
    privacy_body: "Solo recopilamos tu nombre, correo electrónico e idioma preferido para avisarte del lanzamiento. Tus datos los procesa nuestro proveedor de formularios y nunca se venden.",
    cookies_body: "Usamos almacenamiento local estrictamente necesario para recordar tu decisión sobre cookies. No usamos cookies publicitarias.",
    close: "Cerrar",
    cookie_title: "Usamos cookies",
    cookie_desc: "Para ofrecerte una experiencia segura, utilizamos cookies. Es necesario aceptarlas para acceder a Pluravita.",
    cookie_accept: "Aceptar y continuar",
    cookie_reject: "Rechazar todo",
    restricted_title: "Acceso Restringido",
    restricted_desc: "Para garantizar tu seguridad y la del servicio, necesitamos usar cookies. No puedes acceder a Pluravita sin aceptar nuestra política.",
    restricted_action: "He cambiado de opinión, aceptar cookies",
    footer_rights: "Todos los derechos reservados.",
    brand_name: "Comunidad Pluravita",
};

pub static DE: Translations = Translations {
    coming_soon: "Demnächst verfügbar",
    title1: "Raum zum Reden.",
    title2: "Unterstützung zum Wachsen.",
    subtitle: "Verbinden Sie sich mit empathischen Mentoren für erschwingliche, personalisierte Wohlfühl-Unterstützung und emotionales Wachstum.",
    price_tag: "Sitzungen für nur 20€.",
    name_placeholder: "Ihr vollständiger Name",
    email_placeholder: "Ihre E-Mail-Adresse",
    notice_label: "Hinweis:",
    notice: "Pluravita ist eine Coaching-Plattform. Wir bieten keine klinische Therapie oder medizinische Dienstleistungen an.",
    button: "Auf die Warteliste",
    success_title: "Willkommen!",
    default_welcome: "Danke, dass Sie Pluravita beigetreten sind. Wir melden uns bald, um gemeinsam zu wachsen.",
    register_another: "Weitere Person anmelden",
    error_message: "Etwas ist schiefgelaufen. Bitte versuchen Sie es gleich noch einmal.",
    legal_notice: "Impressum",
    privacy_policy: "Datenschutz",
    cookies_policy: "Cookies",
    legal_body: "Pluravita ist eine Coaching- und Wohlfühl-Community in der Vorstartphase. Die Anmeldung zur Warteliste begründet keinen Vertrag und keine Kaufverpflichtung.",
    privacy_body: "Wir erheben nur Ihren Namen, Ihre E-Mail-Adresse und Ihre bevorzugte Sprache, um Sie über den Start zu informieren. Die Daten verarbeitet unser Formularanbieter, sie werden niemals verkauft.",
    cookies_body: "Wir verwenden nur unbedingt notwendigen lokalen Speicher, um Ihre Cookie-Entscheidung zu speichern. Es werden keine Werbe-Cookies gesetzt.",
    close: "Schließen",
    cookie_title: "Wir verwenden Cookies",
    cookie_desc: "Um ein sicheres Coaching-Erlebnis zu bieten, verwenden wir Cookies. Die Zustimmung ist für den Zugriff auf Pluravita erforderlich.",
    cookie_accept: "Akzeptieren & Weiter",
    cookie_reject: "Ablehnen",
    restricted_title: "Zugriff eingeschränkt",
    restricted_desc: "Um Ihre Sicherheit und die der Plattform zu gewährleisten, benötigen wir Cookies. Sie können Pluravita ohne Zustimmung nicht betreten.",
    restricted_action: "Ich habe meine Meinung geändert, Cookies akzeptieren",
    footer_rights: "Alle Rechte vorbehalten.",
    brand_name: "Pluravita Community",
};

/// Copy tables for every supported language. Passed down to the page and the
/// waitlist controller instead of being looked up globally, so a page variant
/// can bring its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    en: &'static Translations,
    es: &'static Translations,
    de: &'static Translations,
}

impl Catalog {
    pub const fn new(
        en: &'static Translations,
        es: &'static Translations,
        de: &'static Translations,
    ) -> Self {
        Self { en, es, de }
    }

    pub const fn builtin() -> Self {
        Self::new(&EN, &ES, &DE)
    }

    pub fn get(&self, language: Language) -> &'static Translations {
        match language {
            Language::En => self.en,
            Language::Es => self.es,
            Language::De => self.de,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
