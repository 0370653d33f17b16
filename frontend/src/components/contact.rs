use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::content::{BENEFITS, CONTACT_INFO, CONTACT_SUBJECTS};
use crate::motion::scheduler::{BrowserScheduler, ChainedTimer};
use crate::motion::visibility::{use_in_view, InViewOptions};
use crate::theme::classes::{TextColors, ThemeClasses};
use crate::theme::provider::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Ismingizni kiriting")]
    MissingName,
    #[error("Email manzil noto'g'ri")]
    InvalidEmail,
    #[error("Mavzuni tanlang")]
    MissingSubject,
    #[error("Xabar matnini kiriting")]
    MissingMessage,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingName => Field::Name,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::MissingSubject => Field::Subject,
            ValidationError::MissingMessage => Field::Message,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Something before and after the `@`.
fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

impl ContactForm {
    pub fn with_field(&self, field: Field, value: String) -> Self {
        let mut next = self.clone();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
            Field::Subject => next.subject = value,
            Field::Message => next.message = value,
        }
        next
    }

    /// Every problem with the form, in field order. Phone is optional.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ValidationError::MissingName);
        }
        if !looks_like_email(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            errors.push(ValidationError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            errors.push(ValidationError::MissingMessage);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum SubmitStage {
    Idle,
    Sending,
    Sent,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let theme = use_theme();
    let colors = TextColors::for_theme(theme.is_dark());
    let palette = ThemeClasses::for_theme(theme.is_dark());
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), InViewOptions::section());

    let form = use_state(ContactForm::default);
    let errors = use_state(Vec::<ValidationError>::new);
    let stage = use_state_eq(|| SubmitStage::Idle);
    let submission = use_mut_ref(|| None::<ChainedTimer>);

    {
        let submission = submission.clone();
        use_effect_with_deps(move |_| move || drop(submission.borrow_mut().take()), ());
    }

    let on_field = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |value: String| {
            form.set(form.with_field(field, value));
            if errors.iter().any(|e| e.field() == field) {
                errors.set(errors.iter().copied().filter(|e| e.field() != field).collect());
            }
        })
    };
    let on_input = |field: Field| {
        let update = on_field(field);
        Callback::from(move |e: InputEvent| update.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_message = {
        let update = on_field(Field::Message);
        Callback::from(move |e: InputEvent| update.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };
    let on_subject = {
        let update = on_field(Field::Subject);
        Callback::from(move |e: Event| update.emit(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let stage = stage.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submission.borrow().as_ref().map_or(false, ChainedTimer::is_running) {
                return;
            }
            if let Err(problems) = form.validate() {
                log::info!("Contact form rejected: {} problem(s)", problems.len());
                errors.set(problems);
                return;
            }
            errors.set(Vec::new());
            stage.set(SubmitStage::Sending);
            start_submission(&submission, form.clone(), stage.clone());
        })
    };

    let field_error = |field: Field| -> Html {
        match errors.iter().find(|e| e.field() == field) {
            Some(e) => html! { <p class={classes!("mt-1", "text-sm", colors.error)} role="alert">{ e.to_string() }</p> },
            None => html! {},
        }
    };
    let input_class = classes!(
        "w-full", "px-4", "py-3", "rounded-lg", "border", "focus:ring-2", "focus:ring-blue-500",
        "focus:border-transparent", "transition-all", "duration-300", palette.input,
    );
    let label_class = classes!("block", "text-sm", "font-medium", "mb-2", colors.secondary);
    let sending = *stage == SubmitStage::Sending;

    html! {
        <section
            id="contact"
            ref={section_ref}
            class={classes!("py-20", "reveal", visible.then(|| "is-visible"), palette.bg)}
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-3xl", "sm:text-4xl", "font-bold", "mb-4", colors.primary)}>{"Bog'laning"}</h2>
                    <p class={classes!("text-lg", "max-w-3xl", "mx-auto", colors.secondary)}>
                        {"Loyihangizni boshlashga tayyormisiz? G'oyalaringizni hayotga tatbiq etishda qanday yordam bera olishimizni muhokama qilaylik."}
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class={classes!("text-2xl", "font-bold", "mb-8", colors.primary)}>{"Suhbatni Boshlaylik"}</h3>
                        <div class="space-y-6 mb-8">
                            { for CONTACT_INFO.iter().map(|info| html! {
                                <div class={classes!("flex", "items-start", "space-x-4", "p-4", "rounded-lg", "transition-colors", "duration-300", palette.surface_hover)}>
                                    <span class="text-2xl" aria-hidden="true">{ info.icon }</span>
                                    <div>
                                        <h4 class={classes!("text-lg", "font-semibold", "mb-1", colors.primary)}>{ info.title }</h4>
                                        <p class="text-blue-600 font-medium mb-1">{ info.details }</p>
                                        <p class={classes!("text-sm", colors.secondary)}>{ info.description }</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class={classes!("rounded-2xl", "p-8", if theme.is_dark() { "bg-gray-800" } else { "bg-gradient-to-br from-blue-50 to-blue-100" })}>
                            <h4 class={classes!("text-lg", "font-semibold", "mb-4", colors.primary)}>{"Nega Supplier IT ni Tanlash Kerak?"}</h4>
                            <ul class="space-y-3">
                                { for BENEFITS.iter().map(|benefit| html! {
                                    <li class={classes!("flex", "items-center", colors.secondary)}>
                                        <span class="text-green-500 mr-3">{"✔"}</span>
                                        { *benefit }
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>

                    <div class="relative">
                        <form {onsubmit} class="space-y-6" novalidate={true}>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div>
                                    <label for="name" class={label_class.clone()}>{"To'liq Ism *"}</label>
                                    <input type="text" id="name" name="name" class={input_class.clone()}
                                        value={form.name.clone()} oninput={on_input(Field::Name)}
                                        placeholder="Sizning to'liq ismingiz" />
                                    { field_error(Field::Name) }
                                </div>
                                <div>
                                    <label for="email" class={label_class.clone()}>{"Email Manzil *"}</label>
                                    <input type="email" id="email" name="email" class={input_class.clone()}
                                        value={form.email.clone()} oninput={on_input(Field::Email)}
                                        placeholder="sizning@email.com" />
                                    { field_error(Field::Email) }
                                </div>
                            </div>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div>
                                    <label for="phone" class={label_class.clone()}>{"Telefon Raqam"}</label>
                                    <input type="tel" id="phone" name="phone" class={input_class.clone()}
                                        value={form.phone.clone()} oninput={on_input(Field::Phone)}
                                        placeholder="+998 99 534 03 13" />
                                </div>
                                <div>
                                    <label for="subject" class={label_class.clone()}>{"Mavzu *"}</label>
                                    <select id="subject" name="subject" class={input_class.clone()} onchange={on_subject}>
                                        <option value="" selected={form.subject.is_empty()}>{"Xizmatni tanlang"}</option>
                                        { for CONTACT_SUBJECTS.iter().map(|subject| html! {
                                            <option value={*subject} selected={form.subject == *subject}>{ *subject }</option>
                                        }) }
                                    </select>
                                    { field_error(Field::Subject) }
                                </div>
                            </div>
                            <div>
                                <label for="message" class={label_class}>{"Xabar *"}</label>
                                <textarea id="message" name="message" rows="6" class={classes!(input_class, "resize-none")}
                                    value={form.message.clone()} oninput={on_message}
                                    placeholder="Loyihangiz haqida bizga ayting..." />
                                { field_error(Field::Message) }
                            </div>
                            <button
                                type="submit"
                                disabled={sending}
                                class="w-full bg-blue-600 text-white py-4 rounded-lg font-semibold hover:bg-blue-700 transition-all duration-300 transform hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed flex items-center justify-center space-x-2"
                            >
                                if sending {
                                    <div class="w-6 h-6 border-2 border-white border-t-transparent rounded-full animate-spin"></div>
                                } else {
                                    <span>{"➤ Xabar Yuborish"}</span>
                                }
                            </button>
                        </form>

                        if *stage == SubmitStage::Sent {
                            <div class={classes!("absolute", "inset-0", "backdrop-blur-sm", "rounded-lg", "flex", "items-center", "justify-center",
                                if theme.is_dark() { "bg-gray-900/95" } else { "bg-white/95" })}>
                                <div class="text-center p-8">
                                    <span class="block text-6xl mb-4 animate-bounce text-green-500">{"✔"}</span>
                                    <h3 class={classes!("text-2xl", "font-bold", "mb-2", colors.primary)}>{"Xabar Yuborildi!"}</h3>
                                    <p class={colors.secondary}>{"Xabaringiz uchun rahmat. Tez orada siz bilan bog'lanamiz!"}</p>
                                </div>
                            </div>
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Simulated send: wait, clear the form, show the success overlay, hide it.
/// The payload goes nowhere.
fn start_submission(
    slot: &Rc<RefCell<Option<ChainedTimer>>>,
    form: UseStateHandle<ContactForm>,
    stage: UseStateHandle<SubmitStage>,
) {
    let mut step = 0;
    let timer = ChainedTimer::start(Rc::new(BrowserScheduler), config::CONTACT_SUBMIT_DELAY_MS, move || {
        step += 1;
        if step == 1 {
            log::info!("Contact form sent (simulated)");
            form.set(ContactForm::default());
            stage.set(SubmitStage::Sent);
            Some(config::CONTACT_SUCCESS_MS)
        } else {
            stage.set(SubmitStage::Idle);
            None
        }
    });
    *slot.borrow_mut() = Some(timer);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Aziza".into(),
            email: "aziza@supplier.uz".into(),
            phone: String::new(),
            subject: "Maslahat".into(),
            message: "Salom".into(),
        }
    }

    #[test]
    fn complete_form_passes_without_phone() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        assert_eq!(
            ContactForm::default().validate(),
            Err(vec![
                ValidationError::MissingName,
                ValidationError::InvalidEmail,
                ValidationError::MissingSubject,
                ValidationError::MissingMessage,
            ])
        );
    }

    #[test]
    fn email_needs_text_on_both_sides_of_the_at() {
        for bad in ["aziza", "@supplier.uz", "aziza@", "   "] {
            let form = filled().with_field(Field::Email, bad.into());
            assert_eq!(form.validate(), Err(vec![ValidationError::InvalidEmail]), "{bad:?}");
        }
        let ok = filled().with_field(Field::Email, "a@b".into());
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let form = filled().with_field(Field::Message, "   \n".into());
        assert_eq!(form.validate(), Err(vec![ValidationError::MissingMessage]));
        assert_eq!(ValidationError::MissingMessage.field(), Field::Message);
    }
}
