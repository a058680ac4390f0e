fn main() {
    leptos::mount::mount_to_body(clinic_site_leptos::App);
}
