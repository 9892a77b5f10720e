#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Same origin in production
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

pub const OFFICE_MOBILE: &str = "+52 1 220 283 4673";
pub const OFFICE_PHONES: &str = "+52 722 957 0084 / 85";
pub const OFFICE_HOURS: &str = "Horario de atención 9:30am – 6:00pm";
pub const CONTACT_EMAIL: &str = "info@avanxia.com";
pub const OFFICE_ADDRESS: &str = "307 Local 10-B, Miguel Alemán, colonia San Mateo Otzacatipan, CP. 50220 Toluca Edo. Mex.";
pub const SHOWREEL_VIDEO: &str = "/videos/avanxia_hq_fixed.webm";
