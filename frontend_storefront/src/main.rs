use frontend_storefront::router::AppRouter;
use frontend_storefront::styles::StyleMap;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let styles = StyleMap::default();

    html! {
        <ContextProvider<StyleMap> context={styles}>
            <AppRouter />
        </ContextProvider<StyleMap>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
