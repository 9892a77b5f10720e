use super::{CatalogItem, Category, CategoryLink, ItemKind, Price};

const INCLUDED: &str = "Incluido";

pub(super) fn categories() -> Vec<Category> {
    vec![
        Category::new("web", "Desarrollo Web", "Diseño y Desarrollo Web", "desarrollo-web"),
        Category::new("apps", "Aplicaciones", "Aplicaciones Web y Móviles", "aplicaciones"),
        Category::new("branding", "Branding", "Branding e Identidad Corporativa", "branding"),
        Category::new("redes", "Redes Sociales", "Gestión de Redes Sociales", "redes-sociales"),
        Category::new("seo", "SEO", "SEO y Marketing de Contenidos", "seo"),
    ]
}

fn one(category: &str) -> CategoryLink {
    CategoryLink::One(category.to_string())
}

fn many(categories: &[&str]) -> CategoryLink {
    CategoryLink::Many(categories.iter().map(|c| c.to_string()).collect())
}

fn usd(amount: f64) -> Price {
    Price::Amount(amount)
}

fn included() -> Price {
    Price::Label(INCLUDED.to_string())
}

pub(super) fn items() -> Vec<CatalogItem> {
    use ItemKind::*;

    vec![
        // Desarrollo web
        CatalogItem::new("web-basic", "Sitio Web Básico", usd(500.0), one("web"), Plan),
        CatalogItem::new("web-pro", "Sitio Web Profesional", usd(1200.0), one("web"), Plan),
        CatalogItem::new("web-ecommerce", "Tienda en Línea", usd(2500.0), one("web"), Plan),
        CatalogItem::new("web-landing", "Landing Page", usd(300.0), one("web"), Service),
        CatalogItem::new("web-maintenance", "Mantenimiento y Soporte Web", usd(150.0), one("web"), Service),
        CatalogItem::new("seo-audit", "Auditoría SEO", usd(100.0), many(&["web", "seo"]), Addon),
        CatalogItem::new("web-copy", "Redacción de Contenidos (5 páginas)", usd(180.0), many(&["web", "apps"]), Addon),
        CatalogItem::new("web-blog", "Blog Autoadministrable", usd(220.0), one("web"), Addon),
        CatalogItem::new("web-hosting", "Hosting y Dominio por 1 año", included(), one("web"), Bonus),

        // Aplicaciones
        CatalogItem::new("apps-mvp", "MVP Web App", usd(3500.0), one("apps"), Plan),
        CatalogItem::new("apps-mobile", "App Móvil Multiplataforma", usd(6000.0), one("apps"), Plan),
        CatalogItem::new("apps-integration", "Integración de API", usd(800.0), one("apps"), Service),
        CatalogItem::new("apps-admin", "Panel de Administración", usd(900.0), one("apps"), Addon),
        CatalogItem::new("apps-push", "Notificaciones Push", usd(400.0), one("apps"), Addon),
        CatalogItem::new("apps-qa", "Pruebas de Calidad", included(), one("apps"), Bonus),
        CatalogItem::new("apps-support", "3 Meses de Soporte", included(), one("apps"), Bonus),

        // Branding
        CatalogItem::new("branding-start", "Identidad Esencial", usd(350.0), one("branding"), Plan),
        CatalogItem::new("branding-full", "Manual de Marca Completo", usd(950.0), one("branding"), Plan),
        CatalogItem::new("branding-photo", "Sesión de Fotografía de Producto", usd(280.0), one("branding"), Service),
        CatalogItem::new("branding-naming", "Naming", usd(200.0), one("branding"), Addon),
        CatalogItem::new("branding-stationery", "Papelería Corporativa", usd(150.0), one("branding"), Addon),
        CatalogItem::new("branding-files", "Archivos Editables", included(), one("branding"), Bonus),

        // Redes sociales
        CatalogItem::new("redes-start", "Gestión Inicial (2 redes)", usd(400.0), one("redes"), Plan),
        CatalogItem::new("redes-growth", "Crecimiento (4 redes)", usd(750.0), one("redes"), Plan),
        CatalogItem::new("redes-ads", "Campaña de Paid Media", usd(300.0), many(&["redes", "seo"]), Addon),
        CatalogItem::new("redes-reels", "Paquete de 4 Reels", usd(260.0), one("redes"), Addon),
        CatalogItem::new("redes-report", "Reporte Mensual de Métricas", included(), one("redes"), Bonus),

        // SEO
        CatalogItem::new("seo-local", "SEO Local", usd(350.0), one("seo"), Plan),
        CatalogItem::new("seo-content", "Marketing de Contenidos", usd(650.0), one("seo"), Plan),
        CatalogItem::new("seo-email", "Email Marketing y Automatización", usd(450.0), one("seo"), Service),
        CatalogItem::new("seo-keywords", "Estudio de Palabras Clave", included(), one("seo"), Bonus),
    ]
}
