//! Flat locale dictionaries.

use std::collections::HashMap;
use std::sync::OnceLock;

use nesh_core::Language;

/// Key → text table for one language.
#[derive(Debug)]
pub struct Dictionary {
    language: Language,
    entries: HashMap<&'static str, &'static str>,
}

impl Dictionary {
    /// The built-in dictionary for `language`.
    pub fn for_language(language: Language) -> &'static Dictionary {
        static EN: OnceLock<Dictionary> = OnceLock::new();
        static AM: OnceLock<Dictionary> = OnceLock::new();

        match language {
            Language::En => EN.get_or_init(|| Dictionary::from_entries(Language::En, EN_ENTRIES)),
            Language::Am => AM.get_or_init(|| Dictionary::from_entries(Language::Am, AM_ENTRIES)),
        }
    }

    fn from_entries(language: Language, entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            language,
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const EN_ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav_home", "Home"),
    ("nav_about", "About"),
    ("nav_products", "Products"),
    ("nav_businesses", "Businesses"),
    ("nav_dashboard", "Dashboard"),
    ("nav_contact", "Contact"),
    ("nav_cart", "Cart"),
    // Hero
    ("hero_title", "ETHIOPIA'S ULTIMATE INTEGRATED FOOD ECOSYSTEM"),
    (
        "hero_subtitle",
        "Three vertically-integrated premium enterprises delivering operational excellence from Ethiopian highlands to global tables through sustainable practices.",
    ),
    ("hero_explore", "Explore Ecosystem"),
    ("hero_investor", "Investor Deck"),
    // Stats
    ("stat_revenue", "Projected Year 1 Revenue"),
    ("stat_positions", "Premium Positions Created"),
    ("stat_markets", "International Markets"),
    ("stat_traceability", "Traceability Guaranteed"),
    // Business cards
    ("business_bakery_title", "Nesh Artisan Bakery"),
    ("business_bakery_subtitle", "Mastercrafted breads & premium patisserie"),
    ("business_dairy_title", "Nesh Premium Dairy"),
    ("business_dairy_subtitle", "High-altitude luxury dairy products"),
    ("business_teff_title", "Nesh Teff Heritage"),
    ("business_teff_subtitle", "Revolutionizing Ethiopia's ancient super grain"),
    ("business_investment", "Strategic Investment"),
    ("business_units", "Daily Premium Units"),
    ("business_artisans", "Master Artisans"),
    ("business_capital", "Capital Investment"),
    ("business_elite", "Holstein-Friesian Elite"),
    ("business_capacity", "Daily Premium Capacity"),
    ("business_tech", "Technology Investment"),
    ("business_injeras", "Daily Artisan Injeras"),
    ("business_export", "Export Margin Excellence"),
    // Location
    ("location", "Flagship Location"),
    ("location_bakery", "Bole, Addis Ababa | Gelan Production Hub"),
    ("location_dairy", "Oromia Region (2,800m altitude)"),
    ("location_teff", "Bole Lemi Industrial Park"),
    // Target market
    ("target_market", "Target Market"),
    ("target_bakery", "Premium consumers, 5-star hotels, corporate elite"),
    ("target_dairy", "Luxury urban market, premium hospitality, international export"),
    ("target_teff", "Urban households, global diaspora, elite institutions"),
    // Products
    ("products", "Signature Products"),
    ("products_bakery", "Teff sourdough, heritage grain pastries, bespoke cakes"),
    ("products_dairy", "Vitamin-D fortified milk, artisanal cheese, premium butter"),
    ("products_teff", "TerraTeff Flour, frozen TerraInjera, gluten-free innovations"),
    // Dashboard
    ("dashboard_title", "Live Operational Dashboard"),
    (
        "dashboard_subtitle",
        "Real-time enterprise performance metrics from our integrated ecosystem",
    ),
    ("dashboard_bakery", "Premium Units Baked Today"),
    ("dashboard_dairy", "Liters Premium Milk Processed"),
    ("dashboard_teff", "Artisan Injeras Created"),
    ("dashboard_export", "International Orders Today"),
    ("capacity", "Capacity"),
    ("target", "Target"),
    // Contact
    ("contact_title", "Contact Our Executive Team"),
    (
        "contact_subtitle",
        "Get in touch with our leadership for partnerships, investments, or inquiries",
    ),
    ("contact_hq", "Corporate Headquarters"),
    ("contact_address", "Addis Ababa, Ethiopia"),
    ("contact_phone", "Phone Number"),
    ("contact_email", "Email Address"),
    ("contact_hours", "Business Hours"),
    ("contact_hours_detail", "Mon-Fri: 8:00 AM - 6:00 PM EAT"),
    // Form
    ("form_name", "Your Name"),
    ("form_email", "Email Address"),
    ("form_subject", "Subject"),
    ("form_message", "Your Message"),
    ("form_send", "Send Message"),
    ("form_sending", "Sending..."),
    ("form_error_required", "Please fill in all required fields"),
    ("form_error_email", "Please enter a valid email address"),
    ("form_error_send", "Failed to send message. Please try again."),
    (
        "form_success",
        "Your message has been sent successfully! We will contact you soon.",
    ),
    // Cart and listing messages
    ("cart_added_title", "Product Added!"),
    ("cart_added_message", "{product} added to your cart"),
    ("cart_count_message", "Your cart now has {count} items"),
    ("quick_view_soon", "Product details coming soon."),
    ("load_more", "Load More Products"),
    ("load_more_loading", "Loading..."),
    ("load_more_soon", "More products coming soon."),
    // Footer
    (
        "footer_description",
        "A vertically-integrated premium food ecosystem delivering excellence from Ethiopian highlands to global tables.",
    ),
    ("footer_quick", "Quick Links"),
    ("footer_units", "Enterprise Units"),
    ("footer_legal", "Legal"),
    ("footer_privacy", "Privacy Policy"),
    ("footer_terms", "Terms of Service"),
    ("footer_cookie", "Cookie Policy"),
    ("footer_investor", "Investor Relations"),
    (
        "footer_copyright",
        "© 2024 NESH Group Holdings. All rights reserved. | Enterprise Target: ETB 440M+ Year 1",
    ),
    // Document
    ("page_title", "NESH | Ethiopia's Ultimate Premium Food Ecosystem"),
];

const AM_ENTRIES: &[(&str, &str)] = &[
    // Navigation
    ("nav_home", "መነሻ"),
    ("nav_about", "ስለ እኛ"),
    ("nav_products", "ምርቶች"),
    ("nav_businesses", "ንግዶች"),
    ("nav_dashboard", "ዳሽቦርድ"),
    ("nav_contact", "አግኙን"),
    ("nav_cart", "ጋሪ"),
    // Hero
    ("hero_title", "የኢትዮጵያ ዋና የምግብ ስርዓት መስተጋብር"),
    (
        "hero_subtitle",
        "ሶስት ላይኛ ደረጃ ድርጅቶች የኢትዮጵያን ከፍተኛ ሜዳዎች ከዓለም ወደ ጠረጴዛዎች የሚያደርሱ የስራ አፈጻጸም ልሂቃንነት።",
    ),
    ("hero_explore", "ስርዓቱን ይመልከቱ"),
    ("hero_investor", "የኢንቨስተር ማስረጃ"),
    // Stats
    ("stat_revenue", "የመጀመሪያ ዓመት ገቢ ትንበያ"),
    ("stat_positions", "የተፈጠሩ ላይኛ ደረጃ ሥራዎች"),
    ("stat_markets", "ዓለም አቀፍ ገበያዎች"),
    ("stat_traceability", "እንዲከተሉ የሚችሉት ዋስትና"),
    // Business cards
    ("business_bakery_title", "ኔሽ አርቲዛን ቦቂ"),
    ("business_bakery_subtitle", "ሙሉ ጠቃሚ ዳቦዎች እና ላይኛ ደረጃ ዳቦ ምርቶች"),
    ("business_dairy_title", "ኔሽ ላይኛ ደረጃ ወተት"),
    ("business_dairy_subtitle", "ከፍተኛ ከፍታ ላይ የሚመረቱ የወተት ምርቶች"),
    ("business_teff_title", "ኔሽ ጤፍ ቅርስ"),
    ("business_teff_subtitle", "የኢትዮጵያን ጥንታዊ ሱፐር እህል እየቀየረ ነው"),
    ("business_investment", "ስትራቴጂ ኢንቨስትመንት"),
    ("business_units", "ዕለታዊ ላይኛ ደረጃ ክፍሎች"),
    ("business_artisans", "አርቲዛን ሙያተኞች"),
    ("business_capital", "የካፒታል ኢንቨስትመንት"),
    ("business_elite", "ሆልስታይን-ፍሪዝያን ኤሊት"),
    ("business_capacity", "ዕለታዊ ላይኛ ደረጃ አቅም"),
    ("business_tech", "ቴክኖሎጂ ኢንቨስትመንት"),
    ("business_injeras", "ዕለታዊ አርቲዛን እንጀራዎች"),
    ("business_export", "የምርት ማውጣት ማርጅን ልሂቃንነት"),
    // Location
    ("location", "ዋና ቦታ"),
    ("location_bakery", "ቦሌ፣ አዲስ አበባ | ገላን የምርት ማዕከል"),
    ("location_dairy", "ኦሮሚያ ክልል (2,800ሜ ከፍታ)"),
    ("location_teff", "ቦሌ ለሚ ኢንዱስትሪያል ፓርክ"),
    // Target market
    ("target_market", "የግብይት ገበያ"),
    ("target_bakery", "ላይኛ ደረጃ ፍጆች፣ 5 ኮከብ ሆቴሎች፣ ኮርፖሬት ኤሊት"),
    ("target_dairy", "ላይኛ ደረጃ የከተማ ገበያ፣ ላይኛ ደረጃ ሆስፒታሊቲ"),
    ("target_teff", "የከተማ ቤተሰቦች፣ ዓለም አቀፍ ዲያስፖራ"),
    // Products
    ("products", "ምልክት ምርቶች"),
    ("products_bakery", "ጤፍ ሳውርዶ፣ የቅርስ እህል ዳቦዎች፣ ልዩ ኬከ"),
    ("products_dairy", "ቫይታሚን-ዲ የተጨመረ ወተት፣ አርቲዛን ፎርማጆ"),
    ("products_teff", "ቴራጤፍ ዱቄት፣ በረዶ የተቀዘፈ ቴራእንጀራ"),
    // Dashboard
    ("dashboard_title", "ቀጥታ የስራ ዳሽቦርድ"),
    (
        "dashboard_subtitle",
        "ከላይኛ ደረጃ የተዋሃደ ስርዓታችን የሚመጡ የንግድ አፈጻጸም መለኪያዎች በእውን ጊዜ",
    ),
    ("dashboard_bakery", "ዛሬ የተጋገሩ ላይኛ ደረጃ ክፍሎች"),
    ("dashboard_dairy", "የተከለሉ ላይኛ ደረጃ ወተት ሊተሮች"),
    ("dashboard_teff", "የተፈጠሩ አርቲዛን እንጀራዎች"),
    ("dashboard_export", "ዛሬ የመጡ ዓለም አቀፍ ትዕዛዞች"),
    ("capacity", "አቅም"),
    ("target", "ዒላማ"),
    // Contact
    ("contact_title", "ከአስፈፃሚ ቡድናችን ጋር ይገናኙ"),
    ("contact_subtitle", "ለአጋርነት፣ ኢንቨስትመንት ወይም ጥያቄዎች ከመሪነታችን ጋር ይገናኙ"),
    ("contact_hq", "የኮርፖሬት መሥሪያ ቤት"),
    ("contact_address", "አዲስ አበባ፣ ኢትዮጵያ"),
    ("contact_phone", "ስልክ ቁጥር"),
    ("contact_email", "ኢሜይል አድራሻ"),
    ("contact_hours", "የስራ ሰዓት"),
    ("contact_hours_detail", "ሰኞ-ዓርብ: 8:00 ጥዋት - 6:00 ማታ የምስራቅ አፍሪካ ጊዜ"),
    // Form
    ("form_name", "ስምዎ"),
    ("form_email", "ኢሜይል አድራሻ"),
    ("form_subject", "ርዕሰ ጉዳይ"),
    ("form_message", "መልእክትዎ"),
    ("form_send", "መልእክት ላክ"),
    ("form_sending", "በመላክ ላይ..."),
    ("form_error_required", "እባክዎ ሁሉንም አስፈላጊ መስኮች ይሙሉ"),
    ("form_error_email", "እባክዎ ትክክለኛ ኢሜይል አድራሻ ያስገቡ"),
    ("form_error_send", "መልእክቱን መላክ አልተቻለም። እባክዎ እንደገና ይሞክሩ።"),
    ("form_success", "መልእክትዎ በተሳካ ሁኔታ ተልኳል! በቅርቡ እንገናኝዎታለን።"),
    // Cart and listing messages
    ("cart_added_title", "ምርት ተጨምሯል!"),
    ("cart_added_message", "{product} ወደ ጋሪዎ ታክሏል"),
    ("cart_count_message", "ጋሪዎ አሁን {count} እቃዎች አሉት"),
    ("quick_view_soon", "የምርት ዝርዝር መረጃ በቅርቡ ይመጣል።"),
    ("load_more", "ተጨማሪ ምርቶችን ጫን"),
    ("load_more_loading", "በመጫን ላይ..."),
    ("load_more_soon", "ተጨማሪ ምርቶች በቅርቡ ይመጣሉ።"),
    // Footer
    (
        "footer_description",
        "ላይኛ ደረጃ የተዋሃደ የምግብ ስርዓት የኢትዮጵያን ከፍተኛ ሜዳዎች ከዓለም ወደ ጠረጴዛዎች የሚያደርስ ልሂቃንነት።",
    ),
    ("footer_quick", "ፈጣን አገናኞች"),
    ("footer_units", "የንግድ ክፍሎች"),
    ("footer_legal", "ህጋዊ"),
    ("footer_privacy", "የግላዊነት ፖሊሲ"),
    ("footer_terms", "የአገልግሎት ውሎች"),
    ("footer_cookie", "ኩኪ ፖሊሲ"),
    ("footer_investor", "የኢንቨስተር ግንኙነቶች"),
    (
        "footer_copyright",
        "© 2024 NESH ግሩፕ ሆልዲንግስ. ሁሉም መብቶች የተጠበቁ ናቸው. | የንግድ ዒላማ: ETB 440M+ ዓመት 1",
    ),
    // Document
    ("page_title", "ኔሽ | የኢትዮጵያ ዋና የምግብ ስርዓት"),
];
