/// Navegación de página completa
pub trait Navigator {
    fn navigate(&self, href: &str);
}

/// `window.location.href = ...`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn navigate(&self, href: &str) {
        log::info!("➡️ Navegando a {}", href);
        let Some(window) = web_sys::window() else {
            log::error!("❌ No hay window para navegar a {}", href);
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            log::error!("❌ Error navegando a {}: {:?}", href, e);
        }
    }
}
