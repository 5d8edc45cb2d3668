//! Seller area: publish a new instrument, manage existing listings, and see
//! sales with shipping details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable for users with a seller profile. Form state lives in
//! [`PublicationDraft`] and [`PublicationEdit`]; both may hold a browser
//! `File`, so their signals use local storage. Listing changes bump a shared
//! `reload` tick and the list is refetched rather than patched.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::order_list::OrderList;
use crate::components::publication_card::PublicationCard;
use crate::net::api;
use crate::net::types::{Category, City, Order, Province, Publication, SubCategory};
use crate::state::filters::{Condition, parse_facet_id};
use crate::state::publication_form::{
    DraftField, FieldErrors, MISSING_FIELDS_MESSAGE, PickedImage, PublicationDraft, PublicationEdit, editor_switched,
    validate_image,
};
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::auth::install_seller_redirect;
use crate::util::toast::{toast_error, toast_success};
#[cfg(feature = "csr")]
use crate::util::object_url::ObjectUrl;

const UPDATED_MESSAGE: &str = "¡Actualización con éxito!";
const DELETED_MESSAGE: &str = "¡Publicación eliminada!";
const DELETE_FAILED_MESSAGE: &str = "No se pudo eliminar la publicación.";
const DELETE_CONFIRM_MESSAGE: &str = "¿Eliminar esta publicación?";

type DraftSignal = RwSignal<PublicationDraft, LocalStorage>;
type EditSignal = RwSignal<Option<PublicationEdit>, LocalStorage>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Publish,
    Posts,
    Sales,
}

// =============================================================================
// Images
// =============================================================================

#[cfg(feature = "csr")]
fn picked_image(ev: &leptos::ev::Event) -> Option<PickedImage> {
    let input: web_sys::HtmlInputElement = event_target(ev);
    input.files()?.get(0).map(PickedImage::from_file)
}

#[cfg(not(feature = "csr"))]
fn picked_image(_ev: &leptos::ev::Event) -> Option<PickedImage> {
    None
}

/// Preview URL for a picked image. The previous URL is revoked on replace.
#[derive(Clone, Copy)]
struct Preview {
    url: RwSignal<Option<String>>,
    #[cfg(feature = "csr")]
    handle: StoredValue<Option<ObjectUrl>, LocalStorage>,
}

impl Preview {
    fn new() -> Self {
        Self {
            url: RwSignal::new(None),
            #[cfg(feature = "csr")]
            handle: StoredValue::new_local(None),
        }
    }

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn show(&self, image: &PickedImage) {
        #[cfg(feature = "csr")]
        {
            let next = ObjectUrl::for_file(image.file());
            self.url.set(next.as_ref().map(|u| u.as_str().to_owned()));
            self.handle.set_value(next);
        }
    }

    fn clear(&self) {
        self.url.set(None);
        #[cfg(feature = "csr")]
        self.handle.set_value(None);
    }
}

// =============================================================================
// Shared form pieces
// =============================================================================

fn id_options(items: Vec<(i64, String)>) -> impl IntoView {
    items
        .into_iter()
        .map(|(id, name)| view! { <option value=id.to_string()>{name}</option> })
        .collect_view()
}

fn condition_options() -> impl IntoView {
    Condition::ALL
        .into_iter()
        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
        .collect_view()
}

#[component]
fn FieldError(errors: RwSignal<FieldErrors>, field: DraftField) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(field)
                .map(|message| view! { <p class="form__error">{message.to_owned()}</p> })
        })
    }
}

fn draft_text(
    draft: DraftSignal,
    label: &'static str,
    get: fn(&PublicationDraft) -> String,
    set: fn(&mut PublicationDraft, String),
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type="text"
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            />
        </label>
    }
}

fn edit_text(
    editing: EditSignal,
    label: &'static str,
    get: fn(&PublicationEdit) -> String,
    set: fn(&mut PublicationEdit, String),
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type="text"
                prop:value=move || editing.with(|e| e.as_ref().map(get).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    editing.update(|e| {
                        if let Some(e) = e {
                            set(e, value);
                        }
                    });
                }
            />
        </label>
    }
}

// =============================================================================
// Publish
// =============================================================================

#[component]
fn PublishForm(seller_id: i64, reload: RwSignal<u32>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let draft: DraftSignal = RwSignal::new_local(PublicationDraft::default());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let preview = Preview::new();

    let provinces = RwSignal::new(Vec::<Province>::new());
    let cities = RwSignal::new(Vec::<City>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let sub_categories = RwSignal::new(Vec::<SubCategory>::new());

    leptos::task::spawn_local(async move {
        let (province_list, category_list) = futures::join!(api::fetch_provinces(), api::fetch_categories());
        match province_list {
            Ok(list) => provinces.set(list),
            Err(e) => log::warn!("province fetch failed: {e}"),
        }
        match category_list {
            Ok(list) => categories.set(list),
            Err(e) => log::warn!("category fetch failed: {e}"),
        }
    });

    let on_province = move |ev: leptos::ev::Event| {
        let id = parse_facet_id(&event_target_value(&ev));
        draft.update(|d| d.set_province(id));
        cities.set(Vec::new());
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                match api::fetch_cities(id).await {
                    Ok(list) => cities.set(list),
                    Err(e) => log::warn!("city fetch failed for province {id}: {e}"),
                }
            });
        }
    };

    let on_category = move |ev: leptos::ev::Event| {
        let id = parse_facet_id(&event_target_value(&ev));
        draft.update(|d| d.set_category(id));
        sub_categories.set(Vec::new());
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                match api::fetch_subcategories(id).await {
                    Ok(list) => sub_categories.set(list),
                    Err(e) => log::warn!("subcategory fetch failed for category {id}: {e}"),
                }
            });
        }
    };

    let on_image = move |ev: leptos::ev::Event| {
        let Some(image) = picked_image(&ev) else {
            return;
        };
        match validate_image(&image.meta) {
            Ok(()) => {
                preview.show(&image);
                draft.update(|d| d.image = Some(image));
            }
            Err(e) => {
                preview.clear();
                draft.update(|d| d.image = None);
                toast_error(toasts, e.to_string());
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(found) = draft.with(PublicationDraft::validate) {
            errors.set(found);
            toast_error(toasts, MISSING_FIELDS_MESSAGE);
            return;
        }
        errors.set(FieldErrors::default());
        let body = draft.with(|d| d.to_multipart(seller_id));
        let success = draft.with(PublicationDraft::success_message);
        busy.set(true);

        leptos::task::spawn_local(async move {
            match api::create_publication(&body).await {
                Ok(()) => {
                    log::info!("seller {seller_id} published a listing");
                    toast_success(toasts, success);
                    draft.set(PublicationDraft::default());
                    preview.clear();
                    cities.set(Vec::new());
                    sub_categories.set(Vec::new());
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => {
                    log::warn!("publish failed: {e}");
                    toast_error(toasts, e.to_string());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="form" on:submit=on_submit>
            <h2>"Publicar instrumento"</h2>

            {draft_text(draft, "Nombre", |d| d.name.clone(), |d, v| d.name = v)}
            <FieldError errors=errors field=DraftField::Name/>
            {draft_text(draft, "Marca", |d| d.brand.clone(), |d, v| d.brand = v)}
            <FieldError errors=errors field=DraftField::Brand/>
            {draft_text(draft, "Precio", |d| d.price.clone(), |d, v| d.price = v)}
            <FieldError errors=errors field=DraftField::Price/>

            <label class="form__label">
                "Condición"
                <select
                    class="form__input"
                    prop:value=move || draft.with(|d| d.condition.map(Condition::as_str).unwrap_or_default())
                    on:change=move |ev| {
                        let condition = Condition::parse(&event_target_value(&ev));
                        draft.update(|d| d.condition = condition);
                    }
                >
                    <option value="">"Seleccionar"</option>
                    {condition_options()}
                </select>
            </label>
            <FieldError errors=errors field=DraftField::Condition/>

            <label class="form__label">
                "Provincia"
                <select
                    class="form__input"
                    prop:value=move || draft.with(|d| d.province_id().map(|id| id.to_string()).unwrap_or_default())
                    on:change=on_province
                >
                    <option value="">"Seleccionar"</option>
                    {move || id_options(provinces.with(|l| l.iter().map(|p| (p.id, p.name.clone())).collect()))}
                </select>
            </label>
            <FieldError errors=errors field=DraftField::Province/>

            <label class="form__label">
                "Ciudad"
                <select
                    class="form__input"
                    disabled=move || draft.with(|d| d.province_id().is_none())
                    prop:value=move || draft.with(|d| d.city_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let id = parse_facet_id(&event_target_value(&ev));
                        draft.update(|d| d.city_id = id);
                    }
                >
                    <option value="">"Seleccionar"</option>
                    {move || id_options(cities.with(|l| l.iter().map(|c| (c.id, c.name.clone())).collect()))}
                </select>
            </label>

            <label class="form__label">
                "Categoría"
                <select
                    class="form__input"
                    prop:value=move || draft.with(|d| d.category_id().map(|id| id.to_string()).unwrap_or_default())
                    on:change=on_category
                >
                    <option value="">"Seleccionar"</option>
                    {move || id_options(categories.with(|l| l.iter().map(|c| (c.id, c.name.clone())).collect()))}
                </select>
            </label>
            <FieldError errors=errors field=DraftField::Category/>

            <label class="form__label">
                "Subcategoría"
                <select
                    class="form__input"
                    disabled=move || draft.with(|d| d.category_id().is_none())
                    prop:value=move || draft.with(|d| d.sub_category_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let id = parse_facet_id(&event_target_value(&ev));
                        draft.update(|d| d.sub_category_id = id);
                    }
                >
                    <option value="">"Seleccionar"</option>
                    {move || id_options(sub_categories.with(|l| l.iter().map(|s| (s.id, s.name.clone())).collect()))}
                </select>
            </label>
            <FieldError errors=errors field=DraftField::SubCategory/>

            <label class="form__label">
                "Descripción"
                <textarea
                    class="form__input"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.description = value);
                    }
                ></textarea>
            </label>
            <FieldError errors=errors field=DraftField::Description/>

            <label class="form__label">
                "Imagen"
                <input class="form__input" type="file" accept="image/*" on:change=on_image/>
            </label>
            <FieldError errors=errors field=DraftField::Image/>
            {move || preview.url.get().map(|src| view! { <img class="form__preview" src=src alt="Vista previa"/> })}

            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Publicando..." } else { "Publicar" }}
            </button>
        </form>
    }
}

// =============================================================================
// Existing listings
// =============================================================================

#[component]
fn PublicationEditor(editing: EditSignal, reload: RwSignal<u32>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let busy = RwSignal::new(false);
    let preview = Preview::new();

    // "Editar" on another card swaps the edit in place without remounting.
    let edited_id = Memo::new(move |_| editing.with(|e| e.as_ref().map(|e| e.id)));
    Effect::new(move |previous: Option<Option<i64>>| {
        let current = edited_id.get();
        if editor_switched(previous, current) {
            preview.clear();
        }
        current
    });

    let on_image = move |ev: leptos::ev::Event| {
        let Some(image) = picked_image(&ev) else {
            return;
        };
        preview.show(&image);
        let mut outcome = Ok(());
        editing.update(|e| {
            if let Some(e) = e {
                outcome = e.pick_image(image);
            }
        });
        if let Err(e) = outcome {
            preview.clear();
            toast_error(toasts, e.to_string());
        }
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| {
        preview.clear();
        editing.set(None);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some((id, body)) = editing.with(|e| e.as_ref().map(|e| (e.id, e.to_multipart()))) else {
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match api::update_publication(id, &body).await {
                Ok(updated) => {
                    log::info!("updated publication {}", updated.id);
                    preview.clear();
                    editing.set(None);
                    toast_success(toasts, UPDATED_MESSAGE);
                    reload.update(|n| *n = n.wrapping_add(1));
                }
                Err(e) => {
                    log::warn!("update of publication {id} failed: {e}");
                    toast_error(toasts, e.to_string());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <form class="form form--inline" on:submit=on_save>
            <h3>"Editar publicación"</h3>
            {edit_text(editing, "Título", |e| e.title.clone(), |e, v| e.title = v)}
            {edit_text(editing, "Marca", |e| e.brand.clone(), |e, v| e.brand = v)}
            {edit_text(editing, "Precio", |e| e.price.clone(), |e, v| e.price = v)}
            <label class="form__label">
                "Estado"
                <select
                    class="form__input"
                    prop:value=move || editing.with(|e| e.as_ref().map(|e| e.state.clone()).unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        editing.update(|e| {
                            if let Some(e) = e {
                                e.state = value;
                            }
                        });
                    }
                >
                    {condition_options()}
                </select>
            </label>
            {edit_text(editing, "Descripción", |e| e.description.clone(), |e, v| e.description = v)}
            {edit_text(editing, "SKU", |e| e.sku.clone(), |e, v| e.sku = v)}
            <label class="form__label">
                "Imagen"
                <input class="form__input" type="file" accept="image/*" on:change=on_image/>
            </label>
            {move || {
                let current = editing.with(|e| e.as_ref().map(|e| e.image_url.clone()).unwrap_or_default());
                let src = preview.url.get().unwrap_or(current);
                (!src.is_empty()).then(|| view! { <img class="form__preview" src=src alt="Imagen actual"/> })
            }}
            <div class="form__actions">
                <button class="btn btn--secondary" type="button" on:click=on_cancel>
                    "Cancelar"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Guardar cambios"
                </button>
            </div>
        </form>
    }
}

#[component]
fn MyPublications(seller_id: i64, reload: RwSignal<u32>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let posts = RwSignal::new(Vec::<Publication>::new());
    let loading = RwSignal::new(true);
    let editing: EditSignal = RwSignal::new_local(None);
    let pending_delete = RwSignal::new(None::<i64>);

    Effect::new(move || {
        reload.track();
        leptos::task::spawn_local(async move {
            match api::fetch_publications().await {
                Ok(list) => posts.set(list.into_iter().filter(|p| p.seller_id == Some(seller_id)).collect()),
                Err(e) => log::warn!("listing fetch failed for seller {seller_id}: {e}"),
            }
            loading.set(false);
        });
    });

    let on_cancel_delete = Callback::new(move |()| pending_delete.set(None));
    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        leptos::task::spawn_local(async move {
            match api::delete_publication(id).await {
                Ok(()) => {
                    posts.update(|list| list.retain(|p| p.id != id));
                    toast_success(toasts, DELETED_MESSAGE);
                }
                Err(e) => {
                    log::warn!("delete of publication {id} failed: {e}");
                    toast_error(toasts, DELETE_FAILED_MESSAGE);
                }
            }
        });
    });

    view! {
        <section class="seller-page__posts">
            <h2>"Mis publicaciones"</h2>
            <Show when=move || editing.with(Option::is_some)>
                <PublicationEditor editing=editing reload=reload/>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Cargando publicaciones..."</p> }
            >
                <Show
                    when=move || posts.with(|p| !p.is_empty())
                    fallback=|| view! { <p>"No tenés publicaciones aún."</p> }
                >
                    <div class="catalog-page__grid">
                        <For
                            each=move || posts.get()
                            key=|p| p.id
                            children=move |p| {
                                let id = p.id;
                                let open_editor = move |_: leptos::ev::MouseEvent| {
                                    let edit = posts.with_untracked(|list| {
                                        list.iter().find(|p| p.id == id).map(PublicationEdit::from_publication)
                                    });
                                    editing.set(edit);
                                };
                                view! {
                                    <div class="seller-page__post">
                                        <PublicationCard publication=p/>
                                        <div class="seller-page__post-actions">
                                            <button class="btn" on:click=open_editor>
                                                "Editar"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| pending_delete.set(Some(id))
                                            >
                                                "Eliminar"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    message=DELETE_CONFIRM_MESSAGE.to_owned()
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </section>
    }
}

// =============================================================================
// Sales
// =============================================================================

#[component]
fn Sales(seller_id: i64) -> impl IntoView {
    let sales = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(true);

    leptos::task::spawn_local(async move {
        match api::fetch_seller_sales(seller_id).await {
            Ok(list) => sales.set(list),
            Err(e) => log::warn!("sales fetch failed for seller {seller_id}: {e}"),
        }
        loading.set(false);
    });

    view! {
        <section class="seller-page__sales">
            <h2>"Mis ventas"</h2>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Cargando ventas..."</p> }
            >
                <OrderList orders=sales empty_text="No tenés ventas aún." show_shipping=true/>
            </Show>
        </section>
    }
}

// =============================================================================
// Page
// =============================================================================

#[component]
pub fn SellerPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_seller_redirect(session, use_navigate());

    let seller_id = Memo::new(move |_| session.with(SessionState::seller_id));
    let tab = RwSignal::new(Tab::Publish);
    let reload = RwSignal::new(0_u32);

    let tab_button = move |target: Tab, label: &'static str| {
        view! {
            <button
                class="tabs__button"
                class:tabs__button--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="seller-page">
            <nav class="tabs">
                {tab_button(Tab::Publish, "Publicar")}
                {tab_button(Tab::Posts, "Mis publicaciones")}
                {tab_button(Tab::Sales, "Ventas")}
            </nav>
            {move || {
                seller_id
                    .get()
                    .map(|id| match tab.get() {
                        Tab::Publish => view! { <PublishForm seller_id=id reload=reload/> }.into_any(),
                        Tab::Posts => view! { <MyPublications seller_id=id reload=reload/> }.into_any(),
                        Tab::Sales => view! { <Sales seller_id=id/> }.into_any(),
                    })
            }}
        </div>
    }
}
