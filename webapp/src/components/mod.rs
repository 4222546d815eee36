pub mod like_widget;
