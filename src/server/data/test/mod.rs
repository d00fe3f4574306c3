mod brand;
mod customer;
mod favorite;
mod listing;
mod review;
mod subscription;
