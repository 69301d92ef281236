use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    FaqOpen,
    FaqClosed,
    Focus,
    ActiveLink,
    Particle,
    ParticleBright,
    Chat,
    Warning,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::FaqOpen) => theme::icons::FAQ_OPEN,
            (true, Icon::FaqClosed) => theme::icons::FAQ_CLOSED,
            (true, Icon::Focus) => theme::icons::FOCUS,
            (true, Icon::ActiveLink) => theme::icons::ACTIVE_LINK,
            (true, Icon::Particle) => theme::icons::PARTICLE,
            (true, Icon::ParticleBright) => theme::icons::PARTICLE_BRIGHT,
            (true, Icon::Chat) => theme::icons::CHAT,
            (true, Icon::Warning) => theme::icons::WARNING,
            (false, Icon::FaqOpen) => theme::icons_ascii::FAQ_OPEN,
            (false, Icon::FaqClosed) => theme::icons_ascii::FAQ_CLOSED,
            (false, Icon::Focus) => theme::icons_ascii::FOCUS,
            (false, Icon::ActiveLink) => theme::icons_ascii::ACTIVE_LINK,
            (false, Icon::Particle) => theme::icons_ascii::PARTICLE,
            (false, Icon::ParticleBright) => theme::icons_ascii::PARTICLE_BRIGHT,
            (false, Icon::Chat) => theme::icons_ascii::CHAT,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
        }
    }
}
