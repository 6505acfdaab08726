use iso_garden::components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
