pub(super) mod account;
pub(super) mod card;
pub(super) mod cart;
pub(super) mod contact;
pub(super) mod home;
pub(super) mod info;
pub(super) mod product;
pub(super) mod shop;
