use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::about::About;
use crate::components::blog::Blog;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::portfolio::Portfolio;
use crate::components::services::Services;
use crate::loading::deferred::{DeferredModules, LoadFuture, ModuleState};

/// Below-the-fold sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Services,
    Portfolio,
    Contact,
    Blog,
    Footer,
}

impl SectionId {
    pub const PAGE_ORDER: [SectionId; 6] = [
        SectionId::About,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Contact,
        SectionId::Blog,
        SectionId::Footer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Contact => "contact",
            SectionId::Blog => "blog",
            SectionId::Footer => "footer",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn render_section(id: SectionId) -> Html {
    match id {
        SectionId::About => html! { <About /> },
        SectionId::Services => html! { <Services /> },
        SectionId::Portfolio => html! { <Portfolio /> },
        SectionId::Contact => html! { <Contact /> },
        SectionId::Blog => html! { <Blog /> },
        SectionId::Footer => html! { <Footer /> },
    }
}

/// Shared through context so every `DeferredSection` hits the same cache.
#[derive(Clone)]
pub struct SectionRegistry {
    modules: Rc<DeferredModules<SectionId, Html>>,
}

impl PartialEq for SectionRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.modules, &other.modules)
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::with_loader(|id| {
            async move {
                // Yield once so the placeholder paints before the section is built.
                TimeoutFuture::new(0).await;
                Ok(render_section(id))
            }
            .boxed_local()
        })
    }
}

impl SectionRegistry {
    pub fn with_loader(loader: impl Fn(SectionId) -> LoadFuture<Html> + 'static) -> Self {
        Self { modules: Rc::new(DeferredModules::new(loader)) }
    }

    pub fn state(&self, id: SectionId) -> ModuleState<Html> {
        self.modules.state(&id)
    }

    pub fn load(&self, id: SectionId) -> LoadFuture<Html> {
        self.modules.load(id)
    }
}

fn spinner() -> Html {
    html! {
        <div class="min-h-[200px] flex items-center justify-center">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DeferredSectionProps {
    pub id: SectionId,
    #[prop_or_default]
    pub placeholder: Option<Html>,
}

#[function_component(DeferredSection)]
pub fn deferred_section(props: &DeferredSectionProps) -> Html {
    let fallback = use_memo(|_| SectionRegistry::default(), ());
    let registry = use_context::<SectionRegistry>().unwrap_or_else(|| (*fallback).clone());
    let state = use_state({
        let registry = registry.clone();
        let id = props.id;
        move || registry.state(id)
    });
    let attempt = use_state_eq(|| 0u32);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |(id, _attempt)| {
                let alive = Rc::new(Cell::new(true));
                match registry.state(*id) {
                    ModuleState::Ready(content) => state.set(ModuleState::Ready(content)),
                    _ => {
                        state.set(ModuleState::Loading);
                        let pending = registry.load(*id);
                        let alive = alive.clone();
                        spawn_local(async move {
                            let result = pending.await;
                            if alive.get() {
                                state.set(match result {
                                    Ok(content) => ModuleState::Ready(content),
                                    Err(e) => ModuleState::Failed(e),
                                });
                            }
                        });
                    }
                }
                move || alive.set(false)
            },
            (props.id, *attempt),
        );
    }

    match &*state {
        ModuleState::Ready(content) => content.clone(),
        ModuleState::Failed(error) => {
            let retry = {
                let attempt = attempt.clone();
                Callback::from(move |_: MouseEvent| attempt.set(*attempt + 1))
            };
            html! {
                <div class="min-h-[200px] flex items-center justify-center px-4" role="alert" data-section={props.id.as_str()}>
                    <div class="max-w-md w-full rounded-2xl border-2 border-dashed border-red-300 bg-red-50 p-8 text-center">
                        <p class="text-lg font-semibold text-red-700 mb-2">{"Bo'limni yuklab bo'lmadi"}</p>
                        <p class="text-sm text-red-600 mb-6">{ error.to_string() }</p>
                        <button
                            onclick={retry}
                            class="bg-blue-600 text-white px-6 py-2 rounded-full font-medium hover:bg-blue-700 transition-colors duration-300"
                        >
                            {"Qayta urinish"}
                        </button>
                    </div>
                </div>
            }
        }
        ModuleState::NotRequested | ModuleState::Loading => {
            props.placeholder.clone().unwrap_or_else(spinner)
        }
    }
}
