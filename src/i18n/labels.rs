// Keep both tables in the same order so gaps are easy to spot.

pub const EN: &[(&str, &str)] = &[
  // common
  ("app.tagline", "Learn to trade with structure"),
  ("common.all", "All"),
  ("common.search", "Search"),
  ("common.back_to_site", "Back to site"),
  ("common.save", "Save changes"),
  ("common.sort_by", "Sort by"),
  ("common.ascending", "Ascending"),
  ("common.descending", "Descending"),
  ("common.status", "Status"),
  ("common.actions", "Actions"),
  ("common.minutes", "min"),
  ("common.empty", "Nothing here yet"),
  ("common.language", "Language"),
  ("error.title", "Could not load data"),
  // navigation
  ("nav.home", "Home"),
  ("nav.blog", "Blog"),
  ("nav.pricing", "Pricing"),
  ("nav.student_demo", "Student demo"),
  ("nav.teacher_demo", "Teacher demo"),
  ("nav.curator_demo", "Curator demo"),
  ("nav.dashboard", "Dashboard"),
  ("nav.courses", "Courses"),
  ("nav.assignments", "Assignments"),
  ("nav.messages", "Messages"),
  ("nav.settings", "Settings"),
  ("nav.students", "Students"),
  ("nav.users", "Users"),
  ("nav.moderation", "Moderation"),
  ("nav.reports", "Reports"),
  // roles
  ("role.student", "Student"),
  ("role.teacher", "Teacher"),
  ("role.curator", "Curator"),
  ("role.student.title", "Student dashboard"),
  ("role.teacher.title", "Teacher dashboard"),
  ("role.curator.title", "Curator dashboard"),
  // home
  ("home.hero.title", "Trading education that fits your schedule"),
  ("home.hero.subtitle", "Structured courses, graded assignments and mentors who review your trades. Start from the basics of market structure and work up to risk management."),
  ("home.cta.pricing", "See plans"),
  ("home.cta.demo", "Open student dashboard"),
  ("home.feature.courses.title", "Step-by-step courses"),
  ("home.feature.courses.body", "From candlestick basics to order flow, every course is split into short lessons you can finish in one sitting."),
  ("home.feature.mentors.title", "Mentor reviews"),
  ("home.feature.mentors.body", "Submit trade journals and analysis. Teachers grade them and leave comments you can act on."),
  ("home.feature.analytics.title", "Progress analytics"),
  ("home.feature.analytics.body", "Track completion, grades and weekly study time on your personal dashboard."),
  ("home.stats.courses", "Courses"),
  ("home.stats.enrollments", "Enrollments"),
  ("home.stats.rating", "Average rating"),
  // blog
  ("blog.title", "Blog"),
  ("blog.subtitle", "Market notes, study tips and platform news"),
  ("blog.all_tags", "All topics"),
  ("blog.read_more", "Read more"),
  ("blog.by", "by"),
  ("blog.empty", "No posts match your search"),
  ("blog.not_found", "Post not found"),
  ("blog.back", "Back to blog"),
  // pricing
  ("pricing.title", "Pricing"),
  ("pricing.subtitle", "Pick the plan that matches how you learn"),
  ("pricing.monthly", "Monthly"),
  ("pricing.annual", "Annual"),
  ("pricing.per_month", "/ month"),
  ("pricing.per_year", "/ year"),
  ("pricing.save", "You save"),
  ("pricing.discount_note", "off with annual billing"),
  ("pricing.choose", "Choose plan"),
  ("pricing.popular", "Most popular"),
  ("plan.basic", "Basic"),
  ("plan.pro", "Pro"),
  ("plan.mentor", "Mentor"),
  ("feature.video_lessons", "All video lessons"),
  ("feature.assignments", "Graded assignments"),
  ("feature.community", "Community chat"),
  ("feature.live_sessions", "Weekly live sessions"),
  ("feature.mentor_reviews", "Personal mentor reviews"),
  ("feature.certificate", "Completion certificate"),
  ("feature.personal_plan", "Personal study plan"),
  // weekdays
  ("day.mon", "Mon"),
  ("day.tue", "Tue"),
  ("day.wed", "Wed"),
  ("day.thu", "Thu"),
  ("day.fri", "Fri"),
  ("day.sat", "Sat"),
  ("day.sun", "Sun"),
  // stat cards
  ("stat.enrolled", "Enrolled courses"),
  ("stat.completion", "Average completion"),
  ("stat.avg_grade", "Average grade"),
  ("stat.pending", "Pending assignments"),
  ("stat.my_courses", "My courses"),
  ("stat.my_students", "Students"),
  ("stat.awaiting_review", "Awaiting review"),
  ("stat.class_grade", "Class average grade"),
  ("stat.users", "Users"),
  ("stat.active_share", "Active users"),
  ("stat.pending_courses", "Courses pending review"),
  ("stat.revenue", "Total revenue"),
  // student
  ("student.activity", "Weekly activity, minutes"),
  ("student.upcoming", "Upcoming assignments"),
  ("student.no_upcoming", "No upcoming assignments"),
  ("student.progress", "Course progress"),
  // courses
  ("course.lessons", "Lessons"),
  ("course.progress", "Progress"),
  ("course.completed", "Completed"),
  ("course.total_time", "Total time"),
  ("course.category", "Category"),
  ("course.level", "Level"),
  ("course.enrolled", "Enrolled"),
  ("course.rating", "Rating"),
  ("course.price", "Price"),
  ("course.open", "Open course"),
  ("course.not_found", "Course not found"),
  ("course.back", "Back to courses"),
  ("level.beginner", "Beginner"),
  ("level.intermediate", "Intermediate"),
  ("level.advanced", "Advanced"),
  ("course.status.published", "Published"),
  ("course.status.draft", "Draft"),
  ("course.status.pending_review", "Pending review"),
  ("course.status.rejected", "Rejected"),
  // assignments
  ("assignment.title", "Assignment"),
  ("assignment.course", "Course"),
  ("assignment.due", "Due"),
  ("assignment.grade", "Grade"),
  ("assignment.status.pending", "Pending"),
  ("assignment.status.submitted", "Submitted"),
  ("assignment.status.graded", "Graded"),
  ("assignment.status.overdue", "Overdue"),
  // teacher
  ("students.name", "Name"),
  ("students.email", "Email"),
  ("students.progress", "Progress"),
  ("students.grade", "Grade"),
  ("students.last_active", "Last active"),
  ("review.awaiting", "Awaiting review"),
  ("review.reviewed", "Reviewed"),
  ("review.student", "Student"),
  ("review.submitted_at", "Submitted"),
  ("review.submit", "Save grade"),
  // curator
  ("curator.revenue_chart", "Monthly revenue"),
  ("users.name", "Name"),
  ("users.role", "Role"),
  ("users.joined", "Joined"),
  ("users.active", "Active"),
  ("users.inactive", "Inactive"),
  ("users.activate", "Activate"),
  ("users.deactivate", "Deactivate"),
  ("moderation.approve", "Approve"),
  ("moderation.reject", "Reject"),
  ("reports.title", "Course report"),
  ("reports.share", "Share of enrollment"),
  // messages
  ("messages.title", "Messages"),
  ("messages.unread", "unread"),
  ("messages.from", "From"),
  ("messages.select", "Select a message to read it"),
  ("messages.empty", "Your inbox is empty"),
  // settings
  ("settings.title", "Settings"),
  ("settings.profile", "Profile"),
  ("settings.name", "Name"),
  ("settings.email", "Email"),
  ("settings.notifications", "Notifications"),
  ("settings.notify_email", "Email notifications"),
  ("settings.notify_reminders", "Assignment reminders"),
  ("settings.notify_digest", "Weekly digest"),
  ("settings.language", "Interface language"),
  ("settings.saved", "Settings saved"),
  // footer and fallbacks
  ("footer.rights", "All rights reserved"),
  ("footer.support", "Support"),
  ("notfound.title", "Page not found"),
  ("notfound.body", "We are sorry, the page you requested does not exist."),
  ("notfound.home", "Go to home page"),
];

pub const RU: &[(&str, &str)] = &[
  // common
  ("app.tagline", "Учитесь торговать системно"),
  ("common.all", "Все"),
  ("common.search", "Поиск"),
  ("common.back_to_site", "Вернуться на сайт"),
  ("common.save", "Сохранить изменения"),
  ("common.sort_by", "Сортировка"),
  ("common.ascending", "По возрастанию"),
  ("common.descending", "По убыванию"),
  ("common.status", "Статус"),
  ("common.actions", "Действия"),
  ("common.minutes", "мин"),
  ("common.empty", "Здесь пока ничего нет"),
  ("common.language", "Язык"),
  ("error.title", "Не удалось загрузить данные"),
  // navigation
  ("nav.home", "Главная"),
  ("nav.blog", "Блог"),
  ("nav.pricing", "Тарифы"),
  ("nav.student_demo", "Демо ученика"),
  ("nav.teacher_demo", "Демо преподавателя"),
  ("nav.curator_demo", "Демо куратора"),
  ("nav.dashboard", "Панель"),
  ("nav.courses", "Курсы"),
  ("nav.assignments", "Задания"),
  ("nav.messages", "Сообщения"),
  ("nav.settings", "Настройки"),
  ("nav.students", "Ученики"),
  ("nav.users", "Пользователи"),
  ("nav.moderation", "Модерация"),
  ("nav.reports", "Отчёты"),
  // roles
  ("role.student", "Ученик"),
  ("role.teacher", "Преподаватель"),
  ("role.curator", "Куратор"),
  ("role.student.title", "Кабинет ученика"),
  ("role.teacher.title", "Кабинет преподавателя"),
  ("role.curator.title", "Кабинет куратора"),
  // home
  ("home.hero.title", "Обучение трейдингу в удобном ритме"),
  ("home.hero.subtitle", "Структурированные курсы, проверяемые задания и наставники, которые разбирают ваши сделки. Начните с основ структуры рынка и дойдите до управления рисками."),
  ("home.cta.pricing", "Посмотреть тарифы"),
  ("home.cta.demo", "Открыть кабинет ученика"),
  ("home.feature.courses.title", "Пошаговые курсы"),
  ("home.feature.courses.body", "От основ свечного анализа до потока ордеров: каждый курс разбит на короткие уроки, которые можно пройти за один раз."),
  ("home.feature.mentors.title", "Разбор от наставника"),
  ("home.feature.mentors.body", "Отправляйте торговые журналы и аналитику. Преподаватели выставляют оценки и оставляют понятные комментарии."),
  ("home.feature.analytics.title", "Аналитика прогресса"),
  ("home.feature.analytics.body", "Следите за прохождением, оценками и временем занятий за неделю в личном кабинете."),
  ("home.stats.courses", "Курсов"),
  ("home.stats.enrollments", "Записей на курсы"),
  ("home.stats.rating", "Средний рейтинг"),
  // blog
  ("blog.title", "Блог"),
  ("blog.subtitle", "Заметки о рынке, советы по обучению и новости платформы"),
  ("blog.all_tags", "Все темы"),
  ("blog.read_more", "Читать далее"),
  ("blog.by", "автор"),
  ("blog.empty", "Нет статей по вашему запросу"),
  ("blog.not_found", "Статья не найдена"),
  ("blog.back", "Вернуться в блог"),
  // pricing
  ("pricing.title", "Тарифы"),
  ("pricing.subtitle", "Выберите тариф под свой формат обучения"),
  ("pricing.monthly", "Помесячно"),
  ("pricing.annual", "За год"),
  ("pricing.per_month", "/ месяц"),
  ("pricing.per_year", "/ год"),
  ("pricing.save", "Экономия"),
  ("pricing.discount_note", "скидка при оплате за год"),
  ("pricing.choose", "Выбрать тариф"),
  ("pricing.popular", "Популярный"),
  ("plan.basic", "Базовый"),
  ("plan.pro", "Профи"),
  ("plan.mentor", "С наставником"),
  ("feature.video_lessons", "Все видеоуроки"),
  ("feature.assignments", "Проверяемые задания"),
  ("feature.community", "Чат сообщества"),
  ("feature.live_sessions", "Еженедельные эфиры"),
  ("feature.mentor_reviews", "Персональные разборы наставника"),
  ("feature.certificate", "Сертификат о прохождении"),
  ("feature.personal_plan", "Индивидуальный план обучения"),
  // weekdays
  ("day.mon", "Пн"),
  ("day.tue", "Вт"),
  ("day.wed", "Ср"),
  ("day.thu", "Чт"),
  ("day.fri", "Пт"),
  ("day.sat", "Сб"),
  ("day.sun", "Вс"),
  // stat cards
  ("stat.enrolled", "Курсов в обучении"),
  ("stat.completion", "Среднее прохождение"),
  ("stat.avg_grade", "Средняя оценка"),
  ("stat.pending", "Заданий к сдаче"),
  ("stat.my_courses", "Мои курсы"),
  ("stat.my_students", "Ученики"),
  ("stat.awaiting_review", "Ждут проверки"),
  ("stat.class_grade", "Средняя оценка группы"),
  ("stat.users", "Пользователи"),
  ("stat.active_share", "Активные пользователи"),
  ("stat.pending_courses", "Курсы на модерации"),
  ("stat.revenue", "Общая выручка"),
  // student
  ("student.activity", "Активность за неделю, минуты"),
  ("student.upcoming", "Ближайшие задания"),
  ("student.no_upcoming", "Ближайших заданий нет"),
  ("student.progress", "Прогресс по курсам"),
  // courses
  ("course.lessons", "Уроки"),
  ("course.progress", "Прогресс"),
  ("course.completed", "Пройдено"),
  ("course.total_time", "Общее время"),
  ("course.category", "Категория"),
  ("course.level", "Уровень"),
  ("course.enrolled", "Записано"),
  ("course.rating", "Рейтинг"),
  ("course.price", "Цена"),
  ("course.open", "Открыть курс"),
  ("course.not_found", "Курс не найден"),
  ("course.back", "Вернуться к курсам"),
  ("level.beginner", "Начальный"),
  ("level.intermediate", "Средний"),
  ("level.advanced", "Продвинутый"),
  ("course.status.published", "Опубликован"),
  ("course.status.draft", "Черновик"),
  ("course.status.pending_review", "На модерации"),
  ("course.status.rejected", "Отклонён"),
  // assignments
  ("assignment.title", "Задание"),
  ("assignment.course", "Курс"),
  ("assignment.due", "Срок"),
  ("assignment.grade", "Оценка"),
  ("assignment.status.pending", "К выполнению"),
  ("assignment.status.submitted", "Отправлено"),
  ("assignment.status.graded", "Проверено"),
  ("assignment.status.overdue", "Просрочено"),
  // teacher
  ("students.name", "Имя"),
  ("students.email", "Эл. почта"),
  ("students.progress", "Прогресс"),
  ("students.grade", "Оценка"),
  ("students.last_active", "Последняя активность"),
  ("review.awaiting", "Ждут проверки"),
  ("review.reviewed", "Проверено"),
  ("review.student", "Ученик"),
  ("review.submitted_at", "Отправлено"),
  ("review.submit", "Сохранить оценку"),
  // curator
  ("curator.revenue_chart", "Выручка по месяцам"),
  ("users.name", "Имя"),
  ("users.role", "Роль"),
  ("users.joined", "Регистрация"),
  ("users.active", "Активен"),
  ("users.inactive", "Неактивен"),
  ("users.activate", "Активировать"),
  ("users.deactivate", "Деактивировать"),
  ("moderation.approve", "Одобрить"),
  ("moderation.reject", "Отклонить"),
  ("reports.title", "Отчёт по курсам"),
  ("reports.share", "Доля записей"),
  // messages
  ("messages.title", "Сообщения"),
  ("messages.unread", "непрочитано"),
  ("messages.from", "От"),
  ("messages.select", "Выберите сообщение, чтобы прочитать его"),
  ("messages.empty", "Входящих сообщений нет"),
  // settings
  ("settings.title", "Настройки"),
  ("settings.profile", "Профиль"),
  ("settings.name", "Имя"),
  ("settings.email", "Эл. почта"),
  ("settings.notifications", "Уведомления"),
  ("settings.notify_email", "Уведомления по почте"),
  ("settings.notify_reminders", "Напоминания о заданиях"),
  ("settings.notify_digest", "Еженедельная сводка"),
  ("settings.language", "Язык интерфейса"),
  ("settings.saved", "Настройки сохранены"),
  // footer and fallbacks
  ("footer.rights", "Все права защищены"),
  ("footer.support", "Поддержка"),
  ("notfound.title", "Страница не найдена"),
  ("notfound.body", "К сожалению, запрошенная страница не существует."),
  ("notfound.home", "На главную"),
];
