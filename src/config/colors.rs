//! Brand colors for technologies, social networks and topics
//!
//! Keys are lowercase with no separators so that display names such as
//! "React Native" or "Distributed Systems" resolve through [`color_for`].

use indexmap::IndexMap;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref COLORS: IndexMap<&'static str, &'static str> = IndexMap::from([
        // Languages
        ("go", "#00ADD8"),
        ("python", "#4B8BBE"),
        ("typescript", "#234A84"),
        ("javascript", "#F7DF1E"),
        ("java", "#F89820"),
        ("csharp", "#953DAC"),
        ("cpp", "#659BD3"),
        ("mssql", "#D10A15"),
        ("bash", "#3E474A"),
        ("powershell", "#207BCD"),
        ("matlab", "#FE5F08"),
        ("latex", "#008181"),
        ("r", "#2167BA"),
        ("vbnet", "#004E8C"),
        // Frontend
        ("web", "#2D2D2D"),
        ("react", "#61DAF6"),
        ("nextjs", "#000000"),
        // Backend
        ("graphql", "#E535AB"),
        ("node", "#68A063"),
        ("django", "#092E20"),
        // Tools, libs
        ("webpack", "#8DD6F9"),
        ("babel", "#F5DB53"),
        ("redux", "#764ABC"),
        ("scikit", "#F89A36"),
        ("pytorch", "#E74A2B"),
        ("tensorflow", "#FF8200"),
        // Mobile
        ("reactnative", "#2D2D2D"),
        ("android", "#56A036"),
        ("ios", "#0C76E2"),
        // Databases
        ("arangodb", "#68A063"),
        ("postgres", "#336791"),
        ("mongo", "#4DB33D"),
        ("redis", "#D82C20"),
        // Cloud
        ("aws", "#FF9900"),
        ("gcp", "#4285F4"),
        ("docker", "#0DB7Ed"),
        ("kubernetes", "#326CE5"),
        ("jenkins", "#314D5E"),
        ("terraform", "#7B42BC"),
        ("azure", "#0084CD"),
        // Messaging
        ("nats", "#199bfc"),
        ("kafka", "#000000"),
        // Social
        ("linkedin", "#0077B5"),
        ("twitter", "#1DA1F2"),
        ("youtube", "#FF0000"),
        ("googlescholar", "#4285F4"),
        ("email", "#D44638"),
        ("buymeacoffee", "#FFDD00"),
        ("reddit", "#ff4500"),
        ("facebook", "#1877f2"),
        // Misc.
        ("git", "#F1502F"),
        ("microservices", "#1890ff"),
        ("distributedsystems", "#404040"),
        ("discuss", "#404040"),
        ("testing", "#049C64"),
        ("backend", "#404040"),
        ("devops", "#059F00"),
        ("serverless", "#000000"),
        ("resume", "#EEEBFF"),
        ("opensource", "#26BE00"),
        ("tutorial", "#4dd0e1"),
    ]);
}

/// Look up the color for a name, ignoring case and separators
pub fn color_for(name: &str) -> Option<&'static str> {
    let key: String = name
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    COLORS.get(key.as_str()).copied()
}
