//! Static window content panels.

use super::*;
use platform_host::ConfettiBurst;
use system_ui::{Button, ButtonSize, Icon, IconSize};

const README_TEXT: &str = "========================================
          SIMPLEDEVS v1.0
========================================

¡Bienvenido a simpleDevs!

Somos un grupo de estudiantes de la
Universidad Nacional de San Luis
dedicados a crear software útil
para la comunidad.

Nuestra Misión:
----------------------------
Nuestra misión es desarrollar y
distribuir soluciones de código
abierto accesibles para todos.

Creemos en la tecnología como un
bien común, por lo que entregamos
nuestro trabajo completamente
gratis y sin esperar nada a cambio,
con el único objetivo de aportar
valor real y beneficio a la
comunidad.

[Presione cualquier tecla...]";

struct ProjectLink {
    name: &'static str,
    description: &'static str,
    live_url: &'static str,
    repo_url: &'static str,
}

const PROJECTS: [ProjectLink; 2] = [
    ProjectLink {
        name: "InTheZone",
        description: "App de productividad & habit tracker",
        live_url: "https://in-the-zone-app.vercel.app/",
        repo_url: "https://github.com/lautaro1910/InTheZone",
    },
    ProjectLink {
        name: "Guía Puntana",
        description: "Guía comercial de San Luis, encontrá proveedores de servicios y productos",
        live_url: "https://guia-puntana.vercel.app/",
        repo_url: "https://github.com/SimpleDevsSL/guia-puntana",
    },
];

struct ContactChannel {
    glyph: &'static str,
    label: &'static str,
    href: &'static str,
    external: bool,
}

const CONTACT_CHANNELS: [ContactChannel; 3] = [
    ContactChannel {
        glyph: "📧",
        label: "Email",
        href: "mailto:simpledevs.sl@gmail.com",
        external: false,
    },
    ContactChannel {
        glyph: "📷",
        label: "Instagram",
        href: "https://www.instagram.com/simpledevs_sl?igsh=MXUwanducGY2dGxlcQ==",
        external: true,
    },
    ContactChannel {
        glyph: "💻",
        label: "GitHub",
        href: "https://github.com/SimpleDevsSL",
        external: true,
    },
];

fn projects_footer(count: usize) -> String {
    format!("{count} objeto(s) | 2.4 KB")
}

pub(super) fn window_content(window_id: WindowId) -> View {
    match window_id {
        WindowId::Readme => view! { <ReadmePanel /> }.into_view(),
        WindowId::Projects => view! { <ProjectsPanel /> }.into_view(),
        WindowId::Connect => view! { <ConnectPanel /> }.into_view(),
        WindowId::Birthday => view! { <BirthdayPanel /> }.into_view(),
    }
}

#[component]
fn ReadmePanel() -> impl IntoView {
    view! {
        <div class="window-panel" data-ui-slot="notepad">
            <pre>{README_TEXT}</pre>
        </div>
    }
}

#[component]
fn ProjectsPanel() -> impl IntoView {
    view! {
        <div class="window-panel" data-ui-slot="explorer">
            <nav data-ui-slot="explorer-menu">
                <span>"Archivo"</span>
                <span>"Edición"</span>
                <span>"Ver"</span>
            </nav>
            <ul data-ui-slot="explorer-items">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <li data-ui-selected={if index == 0 { "true" } else { "false" }}>
                                <Icon icon=IconName::Code size=IconSize::Md />
                                <div>
                                    <strong>{project.name}</strong>
                                    <p>{project.description}</p>
                                    <a href=project.live_url target="_blank" rel="noopener noreferrer">
                                        "Demo"
                                    </a>
                                    <a href=project.repo_url target="_blank" rel="noopener noreferrer">
                                        "Código"
                                    </a>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <footer data-ui-slot="explorer-status">{projects_footer(PROJECTS.len())}</footer>
        </div>
    }
}

#[component]
fn ConnectPanel() -> impl IntoView {
    view! {
        <div class="window-panel" data-ui-slot="mail">
            <div data-ui-slot="mail-headers">
                <div><strong>"Para:"</strong>" Usted"</div>
                <div><strong>"De:"</strong>" Equipo simpleDevs"</div>
                <div><strong>"Asunto:"</strong>" ¡Conectemos!"</div>
            </div>
            <p data-ui-slot="mail-body">
                "¡Nos encantaría saber de ti! Contáctanos a través de cualquiera de estos canales:"
            </p>
            <div data-ui-slot="mail-links">
                {CONTACT_CHANNELS
                    .iter()
                    .map(|channel| {
                        view! {
                            <a
                                href=channel.href
                                target=channel.external.then_some("_blank")
                                rel=channel.external.then_some("noopener noreferrer")
                            >
                                <span aria-hidden="true">{channel.glyph}</span>
                                <span>{channel.label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn BirthdayPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let celebrate = Callback::new(move |_| {
        runtime.host.get_value().fire_burst(&ConfettiBurst::finale());
    });

    view! {
        <div class="window-panel" data-ui-slot="greeting">
            <h2>"¡Feliz Cumpleaños Franco!"</h2>
            <div aria-hidden="true">"🎂 🎉 🎈"</div>
            <p>
                "Franco es uno de los integrantes de SimpleDevs, De parte de todo el equipo de SimpleDevs,"
                <br />
                "¡te deseamos un día increíble!"
            </p>
            <Button size=ButtonSize::Lg on_click=celebrate>
                "¡Festejar!"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn projects_footer_counts_entries() {
        assert_eq!(projects_footer(PROJECTS.len()), "2 objeto(s) | 2.4 KB");
    }

    #[test]
    fn external_contact_links_open_in_new_tabs() {
        for channel in &CONTACT_CHANNELS {
            assert_eq!(channel.external, channel.href.starts_with("https://"));
        }
    }
}
