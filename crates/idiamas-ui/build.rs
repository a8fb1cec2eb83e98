fn main() {
    slint_build::compile("ui/popup.slint").expect("failed to compile popup.slint");
}
